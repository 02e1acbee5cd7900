pub mod upload_dialog;

pub use upload_dialog::ResumeUploadDialog;
