use super::{
    utils::{ResetField, TokenValidity, MISSING_TOKEN_MESSAGE, PASSWORD_RULES},
    view_model::{use_reset_password_view_model, ResetPasswordViewModel},
};
use crate::{
    components::{
        common::Spinner,
        error::{InlineErrorMessage, SuccessMessage},
    },
    router::{FORGOT_PASSWORD_PATH, SIGNIN_PATH},
};
use leptos::*;

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 pr-16 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm";

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! { <ResetPasswordView vm=vm /> }
}

#[component]
pub fn ResetPasswordView(vm: ResetPasswordViewModel) -> impl IntoView {
    let token_validity = vm.token_validity;
    let error = vm.error;
    let success = vm.success;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Set new password"
                    </h2>
                </div>

                {move || match token_validity.get() {
                    TokenValidity::Unknown => view! {
                        <div class="flex justify-center py-8 text-fg-muted" aria-busy="true">
                            <Spinner />
                            <span>"Checking your reset link..."</span>
                        </div>
                    }
                        .into_view(),
                    TokenValidity::Invalid => view! { <InvalidLinkCard error=error.into() /> }.into_view(),
                    TokenValidity::Valid => {
                        if success.get().is_some() {
                            view! {
                                <SuccessMessage message=success.into()>
                                    <div class="mt-4">
                                        <a
                                            href=SIGNIN_PATH
                                            class="text-sm font-medium text-status-success-text underline"
                                        >
                                            "Go to sign in"
                                        </a>
                                    </div>
                                </SuccessMessage>
                            }
                                .into_view()
                        } else {
                            view! { <ResetPasswordForm vm=vm.clone() /> }.into_view()
                        }
                    }
                }}

            </div>
        </div>
    }
}

#[component]
fn InvalidLinkCard(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="rounded-md bg-status-error-bg border border-status-error-border p-4 text-status-error-text space-y-4">
            <h3 class="text-sm font-medium">"Invalid reset link"</h3>
            <p class="text-sm">
                {move || error.get().unwrap_or_else(|| MISSING_TOKEN_MESSAGE.to_string())}
            </p>
            <div class="flex gap-4 text-sm">
                <a href=FORGOT_PASSWORD_PATH class="font-medium text-link hover:text-link-hover">
                    "Request a new link"
                </a>
                <a href=SIGNIN_PATH class="font-medium text-link hover:text-link-hover">
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ResetPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.submit_action.pending();
    let show_password = create_rw_signal(false);
    let show_confirm = create_rw_signal(false);

    let vm_for_submit = vm.clone();
    let vm_for_password = vm.clone();
    let vm_for_confirm = vm.clone();

    view! {
        <form
            class="mt-8 space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                vm_for_submit.submit();
            }
        >
            <div class="space-y-4">
                <div class="relative">
                    <label for="new-password" class="sr-only">"New Password"</label>
                    <input
                        id="new-password"
                        name="new-password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        placeholder="New Password"
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| {
                            vm_for_password.update_field(ResetField::NewPassword, event_target_value(&ev));
                        }
                    />
                    <VisibilityToggle visible=show_password />
                </div>
                <div class="relative">
                    <label for="confirm-password" class="sr-only">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        name="confirm-password"
                        type=move || if show_confirm.get() { "text" } else { "password" }
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        placeholder="Confirm Password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| {
                            vm_for_confirm.update_field(ResetField::ConfirmPassword, event_target_value(&ev));
                        }
                    />
                    <VisibilityToggle visible=show_confirm />
                </div>
            </div>

            <ul class="text-xs space-y-1">
                {PASSWORD_RULES
                    .iter()
                    .map(|rule| {
                        let rule = *rule;
                        let met = move || form.with(|f| !rule.is_violated_by(&f.new_password));
                        view! {
                            <li class=move || if met() { "text-status-success-text" } else { "text-fg-muted" }>
                                {move || if met() { "✓ " } else { "• " }}
                                {rule.hint()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <InlineErrorMessage message=vm.error.into() />

            <div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    <Show when=move || pending.get()>
                        <Spinner />
                    </Show>
                    {move || if pending.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </div>

            <div class="text-sm text-center">
                <a href=SIGNIN_PATH class="font-medium text-link hover:text-link-hover">
                    "Back to sign in"
                </a>
            </div>
        </form>
    }
}

#[component]
fn VisibilityToggle(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="absolute inset-y-0 right-0 z-20 px-3 text-xs font-medium text-fg-muted hover:text-fg"
            aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
            on:click=move |_| visible.update(|v| *v = !*v)
        >
            {move || if visible.get() { "Hide" } else { "Show" }}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::reset_password::{
        repository::ResetPasswordRepository,
        utils::{ResetField, ResetOutcome},
    };
    use crate::test_support::ssr::{render_to_string, settle, UNREACHABLE_BASE_URL};
    use httpmock::prelude::*;
    use std::rc::Rc;

    fn view_model_at(base_url: &str) -> ResetPasswordViewModel {
        let repo =
            ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(base_url)));
        ResetPasswordViewModel::new(repo, Callback::new(|_: String| {}))
    }

    fn view_model() -> ResetPasswordViewModel {
        view_model_at(UNREACHABLE_BASE_URL)
    }

    #[test]
    fn renders_loading_before_activation() {
        let html = render_to_string(|| {
            let vm = view_model();
            view! { <ResetPasswordView vm=vm /> }
        });
        assert!(html.contains("Checking your reset link"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn renders_invalid_state_without_token() {
        let html = render_to_string(|| {
            let vm = view_model();
            vm.activate(None);
            view! { <ResetPasswordView vm=vm /> }
        });
        assert!(html.contains("Invalid reset link"));
        assert!(html.contains(FORGOT_PASSWORD_PATH));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn renders_form_with_rule_checklist_for_valid_token() {
        let html = render_to_string(|| {
            let vm = view_model();
            vm.activate(Some("tok".into()));
            view! { <ResetPasswordView vm=vm /> }
        });
        assert!(html.contains("<form"));
        assert!(html.contains("Confirm Password"));
        assert!(html.contains("At least 8 characters"));
        assert!(html.contains("Reset Password"));
    }

    #[tokio::test]
    async fn renders_invalid_state_after_404() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/reset-password/tok");
                then.status(404)
                    .json_body(serde_json::json!({ "message": "Reset link not found" }));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model_at(&server.base_url());
        vm.activate(Some("tok".into()));
        vm.update_field(ResetField::NewPassword, "Abcdefg1".into());
        vm.update_field(ResetField::ConfirmPassword, "Abcdefg1".into());

        let local = tokio::task::LocalSet::new();
        let outcome = local
            .run_until(async {
                vm.submit();
                settle(|| vm.submit_action.value().get_untracked()).await
            })
            .await
            .expect("reset request finished");
        vm.apply_outcome(outcome);

        let html = view! { <ResetPasswordView vm=vm.clone() /> }
            .into_view()
            .render_to_string()
            .to_string();
        assert!(html.contains("Invalid reset link"));
        assert!(html.contains("Reset link not found"));
        assert!(!html.contains("<form"));
        runtime.dispose();
    }

    #[test]
    fn renders_success_banner_after_reset() {
        let html = render_to_string(|| {
            let vm = view_model();
            vm.activate(Some("tok".into()));
            vm.apply_outcome(ResetOutcome::Succeeded("Password updated".into()));
            view! { <ResetPasswordView vm=vm /> }
        });
        assert!(html.contains("Password updated"));
        assert!(html.contains(SIGNIN_PATH));
        assert!(!html.contains("<form"));
    }
}
