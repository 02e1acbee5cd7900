use reqwest::multipart::{Form, Part};

use super::{
    client::{read_json, ApiClient},
    types::{AnalysisPayload, ApiError, ResumeUpload},
};

pub const ANALYSE_PATH: &str = "/api/v1/resume/analyse";

fn build_form(upload: ResumeUpload) -> Result<Form, ApiError> {
    let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
    if !upload.mime_type.is_empty() {
        part = part
            .mime_str(&upload.mime_type)
            .map_err(|e| ApiError::validation(format!("Invalid file type: {}", e)))?;
    }
    Ok(Form::new()
        .part("resume_file", part)
        .text("job_description", upload.job_description)
        .text("job_title", upload.job_title))
}

impl ApiClient {
    pub async fn analyse_resume(&self, upload: ResumeUpload) -> Result<AnalysisPayload, ApiError> {
        let base_url = self.resolved_analysis_base_url().await;
        let form = build_form(upload)?;
        let request = self
            .http_client()
            .post(&format!("{}{}", base_url, ANALYSE_PATH))
            .multipart(form);
        // Session cookies for the analysis service travel with the request.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        let response = self.send(request).await?;
        read_json(response).await
    }
}
