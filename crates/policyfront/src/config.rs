//! Environment-driven configuration.

use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the storefront backend.
    pub base_url: String,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
    /// Where the session vault file lives.
    pub vault_path: PathBuf,
}

impl AppConfig {
    /// Loads configuration from the environment, reading a `.env` file
    /// first when one exists.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `PFRONT_API_URL` | `http://localhost:5000` |
    /// | `PFRONT_REQUEST_TIMEOUT_SECS` | `30` |
    /// | `PFRONT_VAULT_PATH` | `<platform data dir>/policyfront/session.json` |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present

        let base_url =
            env::var("PFRONT_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

        let timeout_secs = env::var("PFRONT_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string());
        let request_timeout = timeout_secs
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid {
                key: "PFRONT_REQUEST_TIMEOUT_SECS",
                value: timeout_secs.clone(),
            })?;

        let vault_path = env::var("PFRONT_VAULT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_vault_path());

        Ok(Self {
            base_url,
            request_timeout,
            vault_path,
        })
    }
}

/// `<platform data dir>/policyfront/session.json`, or the current directory
/// when the platform reports no data dir.
fn default_vault_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("policyfront")
        .join("session.json")
}
