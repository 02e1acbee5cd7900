use crate::api::{ApiError, MessageResponse};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const MISSING_TOKEN_MESSAGE: &str =
    "Invalid or missing reset token. Please request a new password reset link.";
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Your password has been reset successfully. Redirecting to sign in...";

/// Password rules in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordRuleError {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
}

pub const PASSWORD_RULES: [PasswordRuleError; 4] = [
    PasswordRuleError::TooShort,
    PasswordRuleError::MissingLowercase,
    PasswordRuleError::MissingUppercase,
    PasswordRuleError::MissingDigit,
];

impl PasswordRuleError {
    pub fn is_violated_by(self, password: &str) -> bool {
        match self {
            Self::TooShort => password.chars().count() < MIN_PASSWORD_LENGTH,
            Self::MissingLowercase => !password.chars().any(|c| c.is_ascii_lowercase()),
            Self::MissingUppercase => !password.chars().any(|c| c.is_ascii_uppercase()),
            Self::MissingDigit => !password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::TooShort => "At least 8 characters",
            Self::MissingLowercase => "One lowercase letter",
            Self::MissingUppercase => "One uppercase letter",
            Self::MissingDigit => "One number",
        }
    }
}

pub fn validate_password(password: &str) -> Result<(), PasswordRuleError> {
    match PASSWORD_RULES.iter().find(|rule| rule.is_violated_by(password)) {
        Some(rule) => Err(*rule),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetFormError {
    #[error("Please fill in both password fields")]
    MissingFields,
    #[error("Passwords do not match")]
    Mismatch,
    #[error(transparent)]
    WeakPassword(#[from] PasswordRuleError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetField {
    NewPassword,
    ConfirmPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetFormState {
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetFormState {
    pub fn set(&mut self, field: ResetField, value: String) {
        match field {
            ResetField::NewPassword => self.new_password = value,
            ResetField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Returns the password to submit, or the first local problem.
    pub fn check(&self) -> Result<&str, ResetFormError> {
        if self.new_password.is_empty() || self.confirm_password.is_empty() {
            return Err(ResetFormError::MissingFields);
        }
        if self.new_password != self.confirm_password {
            return Err(ResetFormError::Mismatch);
        }
        validate_password(&self.new_password)?;
        Ok(&self.new_password)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenValidity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl TokenValidity {
    /// Mount-time resolution. Only `Unknown` moves.
    pub fn resolve(self, token: Option<&str>) -> Self {
        match self {
            Self::Unknown if token.is_some_and(|t| !t.trim().is_empty()) => Self::Valid,
            Self::Unknown => Self::Invalid,
            settled => settled,
        }
    }

    /// A rejected submission with 400/404 means the token is dead.
    pub fn after_failure(self, token_rejected: bool) -> Self {
        match self {
            Self::Valid if token_rejected => Self::Invalid,
            other => other,
        }
    }
}

/// Path parameter first, then `?token=`; blank values count as absent.
pub fn token_from_route(path_token: Option<String>, query_token: Option<String>) -> Option<String> {
    path_token
        .into_iter()
        .chain(query_token)
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Succeeded(String),
    Failed { message: String, token_rejected: bool },
}

impl ResetOutcome {
    pub fn from_result(result: Result<MessageResponse, ApiError>) -> Self {
        match result {
            Ok(resp) => Self::Succeeded(
                resp.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            ),
            Err(err) => Self::Failed {
                message: err.user_message(),
                token_rejected: matches!(err.status, Some(400) | Some(404)),
            },
        }
    }
}
