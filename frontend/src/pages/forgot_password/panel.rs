use super::view_model::{use_forgot_password_view_model, ForgotPasswordViewModel};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::{InlineErrorMessage, SuccessMessage},
    },
    router::SIGNIN_PATH,
};
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    view! { <ForgotPasswordView vm=vm /> }
}

#[component]
pub fn ForgotPasswordView(vm: ForgotPasswordViewModel) -> impl IntoView {
    let email = vm.email;
    let success = vm.success;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Request a new reset link"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Reset links expire. Enter your email address and we'll send a fresh one."
                    </p>
                </div>

                <Show
                    when=move || success.get().is_none()
                    fallback=move || view! {
                        <SuccessMessage message=success.into()>
                            <a href=SIGNIN_PATH class="mt-4 inline-block text-sm font-medium underline">
                                "Back to sign in"
                            </a>
                        </SuccessMessage>
                    }
                >
                    <form
                        class="mt-8 space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            if !pending.get_untracked() {
                                submit_action.dispatch(email.get_untracked());
                            }
                        }
                    >
                        <label for="email-address" class="sr-only">"Email address"</label>
                        <input
                            id="email-address"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                            placeholder="Email address"
                            prop:value=email
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                vm.error.set(None);
                            }
                        />

                        <InlineErrorMessage message=vm.error.into() />

                        <Button variant=ButtonVariant::Primary class="w-full" loading=pending>
                            {move || if pending.get() { "Sending..." } else { "Send Reset Link" }}
                        </Button>

                        <div class="text-sm text-center">
                            <a href=SIGNIN_PATH class="font-medium text-link hover:text-link-hover">
                                "Back to sign in"
                            </a>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::UNREACHABLE_BASE_URL;
    use crate::api::ApiClient;
    use crate::pages::forgot_password::repository::ForgotPasswordRepository;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn view_model() -> ForgotPasswordViewModel {
        ForgotPasswordViewModel::new(ForgotPasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(UNREACHABLE_BASE_URL),
        )))
    }

    #[test]
    fn renders_email_form_initially() {
        let html = render_to_string(|| {
            let vm = view_model();
            view! { <ForgotPasswordView vm=vm /> }
        });
        assert!(html.contains("<form"));
        assert!(html.contains("Send Reset Link"));
    }

    #[test]
    fn renders_confirmation_after_success() {
        let html = render_to_string(|| {
            let vm = view_model();
            vm.success.set(Some("Reset link sent".into()));
            view! { <ForgotPasswordView vm=vm /> }
        });
        assert!(html.contains("Reset link sent"));
        assert!(!html.contains("<form"));
    }
}
