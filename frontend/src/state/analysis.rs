use crate::api::AnalysisPayload;
use leptos::*;

/// Holds the most recent résumé analysis so the results page can render what
/// the upload dialog received.
#[derive(Clone, Copy)]
pub struct AnalysisResultSlot(RwSignal<Option<AnalysisPayload>>);

impl AnalysisResultSlot {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn get(&self) -> Option<AnalysisPayload> {
        self.0.get()
    }

    pub fn store(&self, payload: AnalysisPayload) {
        // The host page may already be gone when a slow analysis returns.
        let _ = self.0.try_set(Some(payload));
    }

    pub fn clear(&self) {
        let _ = self.0.try_set(None);
    }

    pub fn is_empty(&self) -> bool {
        self.0.with(Option::is_none)
    }
}

impl Default for AnalysisResultSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AnalysisResultProvider(children: Children) -> impl IntoView {
    provide_context(AnalysisResultSlot::new());
    view! { <>{children()}</> }
}

pub fn use_analysis_result() -> AnalysisResultSlot {
    match use_context::<AnalysisResultSlot>() {
        Some(slot) => slot,
        None => {
            let slot = AnalysisResultSlot::new();
            provide_context(slot);
            slot
        }
    }
}
