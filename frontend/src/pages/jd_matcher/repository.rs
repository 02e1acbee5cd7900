use super::utils::AnalysisRequest;
use crate::api::{AnalysisPayload, ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResumeAnalysisRepository {
    client: Rc<ApiClient>,
}

impl ResumeAnalysisRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn analyse(&self, request: AnalysisRequest) -> Result<AnalysisPayload, ApiError> {
        let upload = request.into_upload().await?;
        self.client.analyse_resume(upload).await
    }
}
