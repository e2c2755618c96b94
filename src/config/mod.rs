//! Configuration loading and defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_PLACEHOLDER_THUMBNAIL};
