use leptos::*;

mod panel;
mod utils;

pub use panel::ResumeAnalysisPanel;

#[component]
pub fn ResumeAnalysisPage() -> impl IntoView {
    view! { <ResumeAnalysisPanel /> }
}
