use leptos::*;

mod components;
mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::JdMatcherPanel;

#[component]
pub fn JdMatcherPage() -> impl IntoView {
    view! { <JdMatcherPanel /> }
}
