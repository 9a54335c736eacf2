//! CLI configuration

use core_kernel::{CoreError, Currency};
use serde::Deserialize;

/// CLI configuration, read from `FARAID_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log filter directive for stderr logging
    pub log_level: String,
    /// Default settlement currency for payouts
    pub currency: Option<Currency>,
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            currency: None,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_source(config::Environment::with_prefix("FARAID"))
    }

    /// Loads configuration from an environment source
    pub fn from_source(source: config::Environment) -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }
}
