use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        forgot_password::ForgotPasswordPage, jd_matcher::JdMatcherPage,
        reset_password::ResetPasswordPage, resume_analysis::ResumeAnalysisPage,
    },
    state::analysis::AnalysisResultProvider,
};

pub const SIGNIN_PATH: &str = "/signin";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";
pub const RESET_PASSWORD_TOKEN_PATH: &str = "/reset-password/:token";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const JD_MATCHER_PATH: &str = "/dashboard/jd-matcher";
pub const RESUME_ANALYSIS_PATH: &str = "/dashboard/jd-matcher/resume-analysis";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AnalysisResultProvider>
            <Router>
                <Routes>
                    <Route path=RESET_PASSWORD_PATH view=ResetPasswordPage/>
                    <Route path=RESET_PASSWORD_TOKEN_PATH view=ResetPasswordPage/>
                    <Route path=FORGOT_PASSWORD_PATH view=ForgotPasswordPage/>
                    <Route path=JD_MATCHER_PATH view=JdMatcherPage/>
                    <Route path=RESUME_ANALYSIS_PATH view=ResumeAnalysisPage/>
                </Routes>
            </Router>
        </AnalysisResultProvider>
    }
}

/// Adapts the router's navigate function into a callback view models can
/// hold without depending on router context.
pub fn use_navigate_callback() -> Callback<String> {
    let navigate = use_navigate();
    Callback::new(move |path: String| navigate(&path, NavigateOptions::default()))
}
