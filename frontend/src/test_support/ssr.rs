use leptos::*;

/// Base URL nothing listens on; requests against it fail fast with a
/// transport error.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

/// Runs `f` inside a fresh reactive runtime and tears it down afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a component tree to HTML without starting any resource loads.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| {
        leptos_reactive::suppress_resource_load(true);
        let html = view().into_view().render_to_string().to_string();
        leptos_reactive::suppress_resource_load(false);
        html
    })
}

/// Yields to the surrounding `LocalSet` until `poll` returns a value, giving
/// up after about two seconds.
pub async fn settle<T>(mut poll: impl FnMut() -> Option<T>) -> Option<T> {
    for _ in 0..200 {
        if let Some(value) = poll() {
            return Some(value);
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    None
}
