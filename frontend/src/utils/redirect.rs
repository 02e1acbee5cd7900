use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Tracks whether the owning component is still mounted.
#[derive(Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    /// Creates a guard that flips to unmounted when the current reactive
    /// owner is cleaned up.
    pub fn new() -> Self {
        let guard = Self(Rc::new(Cell::new(true)));
        let flag = guard.0.clone();
        on_cleanup(move || flag.set(false));
        guard
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigates to `path` after `delay`, unless the page was unmounted first.
pub fn redirect_after(navigate: Callback<String>, path: &'static str, delay: Duration, guard: MountGuard) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        if guard.is_mounted() {
            log::debug!("redirecting to {}", path);
            navigate.call(path.to_string());
        } else {
            log::debug!("skipping redirect to {}: page unmounted", path);
        }
    });
}
