//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "cmc.db";

#[derive(Clone, Debug, Deserialize)]
/// Settings for the console application.
pub struct AppConfig {
    pub database_url: String,
    /// Optional JSON catalog imported at startup.
    pub seed_file: Option<String>,
}

impl AppConfig {
    /// Layers `config/default.yaml` (if present) and `CMC_*` environment
    /// variables over built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    pub fn load_from(base_file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .add_source(File::with_name(base_file).required(false))
            .add_source(Environment::with_prefix("CMC"))
            .build()?
            .try_deserialize()
    }
}
