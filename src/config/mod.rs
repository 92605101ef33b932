//! Configuration handling for the service.
//!
//! Everything is read from environment variables with development defaults,
//! so the binary runs locally without any setup. `Config::from_env` validates
//! the numeric and enumerated values and reports the offending variable.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable names, public so tests and deploy scripts can share them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Encoding used by the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Service runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    fetch_timeout: Duration,
    log_format: LogFormat,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: impl Into<String>, fetch_timeout: Duration, log_format: LogFormat) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            fetch_timeout,
            log_format,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let fetch_timeout = match env::var(ENV_FETCH_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: ENV_FETCH_TIMEOUT_SECS,
                    reason: format!("expected a whole number of seconds, got '{}'", raw),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_FETCH_TIMEOUT_SECS,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => LogFormat::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason: format!("expected 'text' or 'json', got '{}'", raw),
            })?,
            Err(_) => LogFormat::Text,
        };

        Ok(Self {
            bind_addr,
            fetch_timeout,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Total time allowed for the outbound page fetch.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(
            DEFAULT_BIND_ADDR,
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            LogFormat::Text,
        )
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
