use leptos::*;

#[component]
pub fn InlineErrorMessage(
    message: Signal<Option<String>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Error".to_string());
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                class="rounded-md bg-status-error-bg border border-status-error-border p-4 text-status-error-text"
                role="alert"
            >
                <h3 class="text-sm font-medium">{title.clone()}</h3>
                <p class="mt-2 text-sm">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(
    message: Signal<Option<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="rounded-md bg-status-success-bg p-4 text-status-success-text" role="status">
            <div class="flex">
                <div class="flex-shrink-0">
                    <svg class="h-5 w-5 text-status-success-text" viewBox="0 0 20 20" fill="currentColor">
                        <path
                            fill-rule="evenodd"
                            d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                            clip-rule="evenodd"
                        ></path>
                    </svg>
                </div>
                <div class="ml-3">
                    <h3 class="text-sm font-medium">"Success!"</h3>
                    <p class="mt-2 text-sm">{move || message.get().unwrap_or_default()}</p>
                    {children.map(|children| children())}
                </div>
            </div>
        </div>
    }
}
