use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default recognition endpoint, overridable via VOICEKIT_ENDPOINT
pub const DEFAULT_ENDPOINT: &str = "https://stt.tinkoff.ru/v1/stt:recognize";

/// Runtime configuration, read from the environment once at startup and
/// passed by reference into every component that needs it
#[derive(Debug, Clone)]
pub struct Config {
    /// API key of the recognition service key pair (VOICEKIT_API_KEY)
    pub api_key: String,
    /// Secret key of the recognition service key pair (VOICEKIT_SECRET_KEY)
    pub secret_key: String,
    /// Recognition endpoint URL
    pub endpoint: String,
    /// Append-only result log path
    pub result_log: PathBuf,
    /// Postgres connection string; required only when --dbwrite is set
    pub database_url: Option<String>,
    /// Destination table for result rows
    pub db_table: String,
}

impl Config {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("VOICEKIT_API_KEY")
            .context("VOICEKIT_API_KEY environment variable not set")?;
        let secret_key = std::env::var("VOICEKIT_SECRET_KEY")
            .context("VOICEKIT_SECRET_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            secret_key,
            endpoint: std::env::var("VOICEKIT_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            result_log: std::env::var("RESULT_LOG_FILE")
                .unwrap_or_else(|_| "result.log".to_string())
                .into(),
            database_url: std::env::var("DATABASE_URL").ok(),
            db_table: std::env::var("DB_TABLE").unwrap_or_else(|_| "call_results".to_string()),
        })
    }
}

/// Error log location, resolvable even when the rest of the configuration
/// fails to load so that configuration errors still get recorded
pub fn error_log_path() -> PathBuf {
    std::env::var("ERROR_LOG_FILE")
        .unwrap_or_else(|_| "error.log".to_string())
        .into()
}
