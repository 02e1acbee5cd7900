use super::utils::{headline_score, pretty_payload};
use crate::{
    components::empty_state::EmptyState,
    router::JD_MATCHER_PATH,
    state::analysis::{use_analysis_result, AnalysisResultSlot},
};
use leptos::*;

#[component]
pub fn ResumeAnalysisPanel() -> impl IntoView {
    let results = use_analysis_result();
    view! { <ResumeAnalysisView results=results /> }
}

#[component]
pub fn ResumeAnalysisView(results: AnalysisResultSlot) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-3xl space-y-6">
                <h1 class="text-3xl font-extrabold text-fg">"Résumé analysis"</h1>
                {move || match results.get() {
                    Some(payload) => {
                        let score = headline_score(&payload);
                        view! {
                            <div class="space-y-4">
                                {score.map(|score| view! {
                                    <p class="text-lg font-semibold text-fg">
                                        {format!("Match score: {:.0}", score)}
                                    </p>
                                })}
                                <pre class="overflow-x-auto rounded-lg border border-border bg-surface-muted p-4 text-xs text-fg">
                                    {pretty_payload(&payload)}
                                </pre>
                                <a href=JD_MATCHER_PATH class="text-sm font-medium text-link hover:text-link-hover">
                                    "Analyze another résumé"
                                </a>
                            </div>
                        }
                            .into_view()
                    }
                    None => view! {
                        <EmptyState
                            title="No analysis yet"
                            description="Upload a résumé and a job description to see how well they match."
                            action=view! {
                                <a href=JD_MATCHER_PATH class="text-sm font-medium text-link hover:text-link-hover">
                                    "Go to the matcher"
                                </a>
                            }
                                .into_view()
                        />
                    }
                        .into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn renders_empty_state_without_result() {
        let html = render_to_string(|| {
            let results = AnalysisResultSlot::new();
            view! { <ResumeAnalysisView results=results /> }
        });
        assert!(html.contains("No analysis yet"));
        assert!(html.contains(JD_MATCHER_PATH));
    }

    #[test]
    fn renders_payload_and_score() {
        let html = render_to_string(|| {
            let results = AnalysisResultSlot::new();
            results.store(json!({ "match_score": 77, "missing_skills": ["Terraform"] }));
            view! { <ResumeAnalysisView results=results /> }
        });
        assert!(html.contains("Match score: 77"));
        assert!(html.contains("Terraform"));
    }
}
