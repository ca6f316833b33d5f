//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, SearchConfig, UiConfig};

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "PIXELROVER_API_KEY";
