pub mod format;
pub mod redirect;

pub use format::format_file_size;
