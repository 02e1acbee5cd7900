mod auth;
pub mod client;
mod resume;
pub mod types;

pub use client::*;
pub use resume::ANALYSE_PATH;
pub use types::*;
