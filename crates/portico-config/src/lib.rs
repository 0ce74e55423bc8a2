mod env;
mod loader;
pub mod server;
pub mod telemetry;
pub mod translate;

use serde::Deserialize;

pub use server::{CatalogConfig, HealthConfig, ServerConfig};
pub use telemetry::TelemetryConfig;
pub use translate::TranslateConfig;

/// Top-level Portico configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Translator priority configuration
    #[serde(default)]
    pub translate: TranslateConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
