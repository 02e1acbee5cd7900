use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::{read_json, ApiClient},
    types::{ApiError, ForgotPasswordRequest, MessageResponse, ResetPasswordRequest},
};

/// Characters that may not appear raw inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn reset_password_path(token: &str) -> String {
    format!(
        "/api/auth/reset-password/{}",
        utf8_percent_encode(token, PATH_SEGMENT)
    )
}

impl ApiClient {
    pub async fn reset_password(
        &self,
        token: &str,
        password: String,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, reset_password_path(token));
        let response = self
            .send(
                self.http_client()
                    .post(&url)
                    .json(&ResetPasswordRequest { password }),
            )
            .await?;
        let status = response.status().as_u16();
        let body: MessageResponse = read_json(response).await?;
        if body.success {
            Ok(body)
        } else {
            let message = body
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Password reset failed".to_string());
            Err(ApiError {
                code: "HTTP_ERROR".to_string(),
                ..ApiError::unknown(message)
            }
            .with_status(status))
        }
    }

    pub async fn request_password_reset(&self, email: String) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(&format!("{}/api/auth/forgot-password", base_url))
                    .json(&ForgotPasswordRequest { email }),
            )
            .await?;
        read_json(response).await
    }
}
