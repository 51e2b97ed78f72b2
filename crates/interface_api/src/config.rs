//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

/// API configuration
///
/// Every field can be overridden by an `API_`-prefixed environment
/// variable, e.g. `API_PORT=9000` or `API_STORE_PATH=/var/lib/quotes.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Location of the quote record snapshot
    pub store_path: PathBuf,
    /// Whether a fresh store starts with the mock records
    pub seed_store: bool,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            store_path: PathBuf::from("data/quotes.json"),
            seed_store: true,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment, falling back to defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
