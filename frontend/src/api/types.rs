use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Résumé plus job details, ready to be encoded as multipart form data.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub job_title: String,
    pub job_description: String,
}

/// The analysis service's response. Passed to the results view untouched.
pub type AnalysisPayload = Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing)]
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
            status: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
            status: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
            status: None,
        }
    }

    /// Builds an error from a non-success response. The body's `message`
    /// wins over `error`; anything else (empty, HTML, unparsable) yields an
    /// `UNKNOWN` error carrying only the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed.as_ref().and_then(extract_message);
        match message {
            Some(message) => {
                let code = parsed
                    .as_ref()
                    .and_then(|v| v.get("code"))
                    .and_then(Value::as_str)
                    .unwrap_or("HTTP_ERROR")
                    .to_string();
                let details = parsed.as_ref().and_then(|v| v.get("details")).cloned();
                Self {
                    error: message,
                    code,
                    details,
                    status: Some(status),
                }
            }
            None => Self {
                status: Some(status),
                ..Self::unknown(format!("Request failed with status {}", status))
            },
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Text suitable for showing to the user. Transport failures and
    /// errors without a server-supplied message collapse to a generic line.
    pub fn user_message(&self) -> String {
        match self.code.as_str() {
            "REQUEST_FAILED" | "UNKNOWN" => GENERIC_ERROR_MESSAGE.to_string(),
            _ if self.error.trim().is_empty() => GENERIC_ERROR_MESSAGE.to_string(),
            _ => self.error.clone(),
        }
    }
}

pub(crate) fn extract_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}
