use super::repository::ForgotPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use leptos::*;
use std::rc::Rc;

pub const DEFAULT_SENT_MESSAGE: &str = "If that address has an account, a reset link is on its way.";

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn new(repository: ForgotPasswordRepository) -> Self {
        let submit_action = create_action(move |value: &String| {
            let repo = repository.clone();
            let email = value.trim().to_string();
            async move {
                validate_email(&email)?;
                repo.request_reset(email).await
            }
        });
        Self {
            email: create_rw_signal(String::new()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            submit_action,
        }
    }

    pub fn apply_result(&self, result: Result<MessageResponse, ApiError>) {
        match result {
            Ok(resp) => {
                let message = resp
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SENT_MESSAGE.to_string());
                let _ = self.success.try_set(Some(message));
                let _ = self.error.try_set(None);
            }
            Err(err) => {
                let _ = self.error.try_set(Some(err.user_message()));
                let _ = self.success.try_set(None);
            }
        }
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = ForgotPasswordViewModel::new(ForgotPasswordRepository::new_with_client(Rc::new(api)));

    create_effect(move |_| {
        if let Some(result) = vm.submit_action.value().get() {
            vm.apply_result(result);
        }
    });

    vm
}

fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    Ok(())
}
