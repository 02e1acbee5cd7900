use super::{components::ResumeUploadDialog, view_model::use_upload_view_model};
use crate::{
    components::common::{Button, ButtonVariant},
    router::RESUME_ANALYSIS_PATH,
    state::analysis::use_analysis_result,
};
use leptos::*;

#[component]
pub fn JdMatcherPanel() -> impl IntoView {
    let is_open = create_rw_signal(false);
    let vm = use_upload_view_model(is_open);
    let results = use_analysis_result();

    view! {
        <div class="min-h-screen bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-3xl space-y-6">
                <div>
                    <h1 class="text-3xl font-extrabold text-fg">"Job description matcher"</h1>
                    <p class="mt-2 text-sm text-fg-muted">
                        "Compare your résumé against a specific role and see where it falls short."
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <Button variant=ButtonVariant::Primary on:click=move |_| is_open.set(true)>
                        "Analyze my résumé"
                    </Button>
                    <Show when=move || !results.is_empty()>
                        <a href=RESUME_ANALYSIS_PATH class="text-sm font-medium text-link hover:text-link-hover">
                            "View last analysis"
                        </a>
                    </Show>
                </div>
            </div>
            <ResumeUploadDialog vm=vm />
        </div>
    }
}
