pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Routes `log` records to the browser console.
pub fn init_logging() {
    let _ = console_log::init_with_level(log::Level::Debug);
}
