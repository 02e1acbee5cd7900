use crate::api::{ApiError, ResumeUpload};
#[cfg(test)]
use std::rc::Rc;

pub const PDF_MIME: &str = "application/pdf";

/// PDFs and anything the browser labels as a document (doc, docx, odt).
pub fn is_accepted_mime(mime: &str) -> bool {
    mime == PDF_MIME || mime.contains("document")
}

#[derive(Debug, Clone)]
enum FileSource {
    Browser(web_sys::File),
    #[cfg(test)]
    Memory(Rc<Vec<u8>>),
}

#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    source: FileSource,
}

impl SelectedFile {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            source: FileSource::Browser(file),
        }
    }

    #[cfg(test)]
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            source: FileSource::Memory(Rc::new(bytes)),
        }
    }

    pub fn is_accepted(&self) -> bool {
        is_accepted_mime(&self.mime_type)
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, ApiError> {
        match &self.source {
            FileSource::Browser(file) => {
                let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
                    .await
                    .map_err(|e| ApiError::unknown(format!("Failed to read {}: {:?}", self.name, e)))?;
                Ok(js_sys::Uint8Array::new(&buffer).to_vec())
            }
            #[cfg(test)]
            FileSource::Memory(bytes) => Ok(bytes.as_ref().clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDetails {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}

impl JobDetails {
    pub fn set(&mut self, field: JobField, value: String) {
        match field {
            JobField::Title => self.job_title = value,
            JobField::Company => self.company_name = value,
            JobField::Description => self.job_description = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.job_title, &self.company_name, &self.job_description]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
}

pub fn submit_enabled(file: Option<&SelectedFile>, job: &JobDetails, submission: Submission) -> bool {
    file.is_some() && job.is_complete() && submission == Submission::Idle
}

/// Everything the analysis request needs, captured when the user submits.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file: SelectedFile,
    pub job: JobDetails,
}

impl AnalysisRequest {
    pub async fn into_upload(self) -> Result<ResumeUpload, ApiError> {
        let bytes = self.file.read_bytes().await?;
        Ok(ResumeUpload {
            file_name: self.file.name,
            mime_type: self.file.mime_type,
            bytes,
            job_title: self.job.job_title,
            job_description: self.job.job_description,
        })
    }
}
