use super::{
    repository::ResetPasswordRepository,
    utils::{
        token_from_route, ResetField, ResetFormState, ResetOutcome, TokenValidity,
        MISSING_TOKEN_MESSAGE,
    },
};
use crate::{
    api::ApiClient,
    router::{use_navigate_callback, SIGNIN_PATH},
    utils::redirect::{redirect_after, MountGuard},
};
use leptos::*;
use leptos_router::{use_params_map, use_query_map};
use std::rc::Rc;
use std::time::Duration;

pub const SIGNIN_REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetSubmission {
    pub token: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub form: RwSignal<ResetFormState>,
    pub token_validity: RwSignal<TokenValidity>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<ResetSubmission, ResetOutcome>,
    token: StoredValue<Option<String>>,
    navigate: Callback<String>,
    mount: MountGuard,
}

impl ResetPasswordViewModel {
    pub fn new(repository: ResetPasswordRepository, navigate: Callback<String>) -> Self {
        let submit_action = create_action(move |submission: &ResetSubmission| {
            let repo = repository.clone();
            let ResetSubmission { token, password } = submission.clone();
            async move { ResetOutcome::from_result(repo.reset_password(token, password).await) }
        });

        Self {
            form: create_rw_signal(ResetFormState::default()),
            token_validity: create_rw_signal(TokenValidity::Unknown),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            submit_action,
            token: store_value(None),
            navigate,
            mount: MountGuard::new(),
        }
    }

    /// Settles token validity from the route. No request is made here; a
    /// present token is trusted until the server says otherwise.
    pub fn activate(&self, token: Option<String>) {
        let current = self.token_validity.get_untracked();
        let next = current.resolve(token.as_deref());
        if next == current {
            return;
        }
        self.token_validity.set(next);
        match next {
            TokenValidity::Valid => self.token.set_value(token),
            TokenValidity::Invalid => self.error.set(Some(MISSING_TOKEN_MESSAGE.to_string())),
            TokenValidity::Unknown => {}
        }
    }

    pub fn update_field(&self, field: ResetField, value: String) {
        self.form.update(|form| form.set(field, value));
        self.error.set(None);
        self.success.set(None);
    }

    /// Runs local checks and, if they pass, dispatches the single reset request.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked()
            || self.token_validity.get_untracked() != TokenValidity::Valid
        {
            return;
        }
        let Some(token) = self.token.get_value() else {
            return;
        };
        let checked = self
            .form
            .with_untracked(|form| form.check().map(str::to_string));
        match checked {
            Ok(password) => {
                self.error.set(None);
                self.submit_action.dispatch(ResetSubmission { token, password });
            }
            Err(err) => {
                self.error.set(Some(err.to_string()));
                self.success.set(None);
            }
        }
    }

    /// Applies a finished request to the page state. Returns `true` when the
    /// caller should schedule the sign-in redirect.
    pub fn apply_outcome(&self, outcome: ResetOutcome) -> bool {
        match outcome {
            ResetOutcome::Succeeded(message) => {
                let _ = self.form.try_set(ResetFormState::default());
                let _ = self.error.try_set(None);
                let _ = self.success.try_set(Some(message));
                true
            }
            ResetOutcome::Failed {
                message,
                token_rejected,
            } => {
                let _ = self.success.try_set(None);
                let _ = self.error.try_set(Some(message));
                let _ = self
                    .token_validity
                    .try_update(|validity| *validity = validity.after_failure(token_rejected));
                false
            }
        }
    }

    fn schedule_signin_redirect(&self) {
        redirect_after(
            self.navigate,
            SIGNIN_PATH,
            SIGNIN_REDIRECT_DELAY,
            self.mount.clone(),
        );
    }
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));
    let vm = ResetPasswordViewModel::new(repository, use_navigate_callback());

    let params = use_params_map();
    let query = use_query_map();
    let vm_for_route = vm.clone();
    create_effect(move |_| {
        let token = token_from_route(
            params.with(|p| p.get("token").cloned()),
            query.with(|q| q.get("token").cloned()),
        );
        vm_for_route.activate(token);
    });

    let vm_for_result = vm.clone();
    let submit_value = vm.submit_action.value();
    create_effect(move |_| {
        if let Some(outcome) = submit_value.get() {
            if vm_for_result.apply_outcome(outcome) {
                vm_for_result.schedule_signin_redirect();
            }
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::GENERIC_ERROR_MESSAGE;
    use crate::test_support::ssr::{settle, with_runtime, UNREACHABLE_BASE_URL};
    use httpmock::prelude::*;

    fn view_model(base_url: &str) -> ResetPasswordViewModel {
        let repo =
            ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(base_url)));
        ResetPasswordViewModel::new(repo, Callback::new(|_: String| {}))
    }

    fn fill(vm: &ResetPasswordViewModel, password: &str, confirm: &str) {
        vm.update_field(ResetField::NewPassword, password.into());
        vm.update_field(ResetField::ConfirmPassword, confirm.into());
    }

    fn nothing_dispatched(vm: &ResetPasswordViewModel) -> bool {
        !vm.submit_action.pending().get_untracked()
            && vm.submit_action.input().get_untracked().is_none()
    }

    #[test]
    fn missing_token_marks_invalid_without_request() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            assert_eq!(vm.token_validity.get(), TokenValidity::Unknown);
            vm.activate(None);
            assert_eq!(vm.token_validity.get(), TokenValidity::Invalid);
            assert_eq!(vm.error.get().as_deref(), Some(MISSING_TOKEN_MESSAGE));

            fill(&vm, "Abcdefg1", "Abcdefg1");
            vm.submit();
            assert!(nothing_dispatched(&vm));
        });
    }

    #[test]
    fn present_token_is_trusted_and_later_activation_is_ignored() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            assert_eq!(vm.token_validity.get(), TokenValidity::Valid);
            assert!(vm.error.get().is_none());

            vm.activate(None);
            assert_eq!(vm.token_validity.get(), TokenValidity::Valid);
        });
    }

    #[tokio::test]
    async fn mismatched_passwords_never_hit_the_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/reset-password/tok");
                then.status(200).json_body(serde_json::json!({ "success": true }));
            })
            .await;

        with_runtime(|| {
            let vm = view_model(&server.base_url());
            vm.activate(Some("tok".into()));
            fill(&vm, "Abcdefg1", "Abcdefg2");
            vm.submit();
            assert_eq!(vm.error.get().as_deref(), Some("Passwords do not match"));
            assert!(nothing_dispatched(&vm));
        });
        mock.assert_hits_async(0).await;
    }

    #[test]
    fn weak_password_sets_rule_error() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            fill(&vm, "abcdefgh", "abcdefgh");
            vm.submit();
            let error = vm.error.get().expect("error set");
            assert!(error.contains("uppercase letter"));
            assert!(nothing_dispatched(&vm));
        });
    }

    #[test]
    fn empty_fields_set_error() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            vm.submit();
            assert_eq!(
                vm.error.get().as_deref(),
                Some("Please fill in both password fields")
            );
        });
    }

    #[test]
    fn editing_a_field_clears_messages() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            vm.error.set(Some("old error".into()));
            vm.success.set(Some("old success".into()));
            vm.update_field(ResetField::NewPassword, "A".into());
            assert!(vm.error.get().is_none());
            assert!(vm.success.get().is_none());
            assert_eq!(vm.form.get().new_password, "A");
        });
    }

    #[test]
    fn success_clears_fields_and_requests_redirect() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            fill(&vm, "Abcdefg1", "Abcdefg1");
            let redirect = vm.apply_outcome(ResetOutcome::Succeeded("Done".into()));
            assert!(redirect);
            assert_eq!(vm.success.get().as_deref(), Some("Done"));
            assert_eq!(vm.form.get(), ResetFormState::default());
            assert_eq!(vm.token_validity.get(), TokenValidity::Valid);
        });
    }

    #[test]
    fn rejected_token_turns_page_invalid() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            let redirect = vm.apply_outcome(ResetOutcome::Failed {
                message: "Reset link has expired".into(),
                token_rejected: true,
            });
            assert!(!redirect);
            assert_eq!(vm.token_validity.get(), TokenValidity::Invalid);
            assert_eq!(vm.error.get().as_deref(), Some("Reset link has expired"));

            fill(&vm, "Abcdefg1", "Abcdefg1");
            vm.submit();
            assert!(nothing_dispatched(&vm));
        });
    }

    #[test]
    fn other_failures_keep_form_available() {
        with_runtime(|| {
            let vm = view_model(UNREACHABLE_BASE_URL);
            vm.activate(Some("tok".into()));
            vm.apply_outcome(ResetOutcome::Failed {
                message: GENERIC_ERROR_MESSAGE.into(),
                token_rejected: false,
            });
            assert_eq!(vm.token_validity.get(), TokenValidity::Valid);
            assert_eq!(vm.error.get().as_deref(), Some(GENERIC_ERROR_MESSAGE));
        });
    }

    #[tokio::test]
    async fn valid_password_is_sent_and_404_invalidates_the_link() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/auth/reset-password/tok")
                    .json_body(serde_json::json!({ "password": "Abcdefg1" }));
                then.status(404).json_body(serde_json::json!({ "message": "Token not found" }));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server.base_url());
        vm.activate(Some("tok".into()));
        fill(&vm, "Abcdefg1", "Abcdefg1");

        let local = tokio::task::LocalSet::new();
        let outcome = local
            .run_until(async {
                vm.submit();
                assert!(vm.submit_action.pending().get_untracked());
                assert!(vm.error.get_untracked().is_none());
                settle(|| vm.submit_action.value().get_untracked()).await
            })
            .await
            .expect("reset request finished");

        assert_eq!(
            outcome,
            ResetOutcome::Failed {
                message: "Token not found".into(),
                token_rejected: true
            }
        );
        assert!(!vm.apply_outcome(outcome));
        assert_eq!(vm.token_validity.get_untracked(), TokenValidity::Invalid);
        assert_eq!(vm.error.get_untracked().as_deref(), Some("Token not found"));
        mock.assert_hits_async(1).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn accepted_reset_asks_for_redirect() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/reset-password/tok");
                then.status(200)
                    .json_body(serde_json::json!({ "success": true, "message": "Password updated" }));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server.base_url());
        vm.activate(Some("tok".into()));
        fill(&vm, "Abcdefg1", "Abcdefg1");

        let local = tokio::task::LocalSet::new();
        let outcome = local
            .run_until(async {
                vm.submit();
                // a second click while pending is ignored
                vm.submit();
                settle(|| vm.submit_action.value().get_untracked()).await
            })
            .await
            .expect("reset request finished");

        assert!(vm.apply_outcome(outcome));
        assert_eq!(vm.success.get_untracked().as_deref(), Some("Password updated"));
        assert_eq!(vm.form.get_untracked(), ResetFormState::default());
        mock.assert_hits_async(1).await;
        runtime.dispose();
    }

    #[test]
    fn late_outcome_after_unmount_does_not_panic() {
        with_runtime(|| {
            let (vm, disposer) = as_child_of_current_owner(|_: ()| {
                let vm = view_model(UNREACHABLE_BASE_URL);
                vm.activate(Some("tok".into()));
                vm
            })(());
            drop(disposer);

            assert!(!vm.mount.is_mounted());
            assert!(vm.apply_outcome(ResetOutcome::Succeeded("Done".into())));
            assert!(!vm.apply_outcome(ResetOutcome::Failed {
                message: "Token not found".into(),
                token_rejected: true,
            }));
        });
    }
}
