#![allow(clippy::must_use_candidate)]

pub mod endpoint;
mod env;
pub mod input;
mod loader;
pub mod logging;

use serde::Deserialize;

pub use endpoint::*;
pub use input::*;
pub use logging::*;

/// Top-level scrivener configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Transcription backend location and routes
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Client-side input checks
    #[serde(default)]
    pub input: InputConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
