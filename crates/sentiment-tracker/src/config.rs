//! Application configuration.

use crate::error::{AppError, AppResult};
use sentiment_dashboard::DashboardConfig;
use sentiment_feed::{DEFAULT_BINANCE_URL, DEFAULT_TIMEOUT, DEFAULT_YAHOO_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SENTIMENT_CONFIG";

/// Config file used when neither the CLI nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Main application configuration.
///
/// Every field has a default, so an empty or missing file is a valid
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seconds between poll cycles. The first cycle runs at startup.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Per-request timeout for provider calls (seconds).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Crypto exchange REST base URL.
    #[serde(default = "default_binance_url")]
    pub binance_url: String,
    /// Equity chart API base URL.
    #[serde(default = "default_yahoo_url")]
    pub yahoo_url: String,
    /// Dashboard server.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_poll_interval_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_binance_url() -> String {
    DEFAULT_BINANCE_URL.to_string()
}

fn default_yahoo_url() -> String {
    DEFAULT_YAHOO_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            binance_url: default_binance_url(),
            yahoo_url: default_yahoo_url(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, resolving the path as
    /// explicit argument > `SENTIMENT_CONFIG` > `config/default.toml`.
    ///
    /// An explicitly named file must exist. The default path may be
    /// absent, in which case built-in defaults are used.
    pub fn load(explicit_path: Option<&str>) -> AppResult<Self> {
        let named = explicit_path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV).ok());

        match named {
            Some(path) => Self::from_file(&path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                tracing::warn!(path = DEFAULT_CONFIG_PATH, "Config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;

        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the poll loop cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.poll_interval_secs == 0 {
            return Err(AppError::Config(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        for (name, url) in [("binance_url", &self.binance_url), ("yahoo_url", &self.yahoo_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.dashboard.enabled && self.dashboard.update_interval_ms == 0 {
            return Err(AppError::Config(
                "dashboard.update_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.binance_url, "https://api.binance.com");
        assert!(config.dashboard.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.yahoo_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            poll_interval_secs = 30

            [dashboard]
            port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.dashboard.port, 9090);
        assert_eq!(config.dashboard.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = AppConfig::from_toml("poll_interval_secs = 0").unwrap_err();
        assert!(err.to_string().contains("poll_interval_secs"));
    }

    #[test]
    fn test_bad_url_rejected() {
        let err = AppConfig::from_toml(r#"binance_url = "api.binance.com""#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = AppConfig::load(Some("/nonexistent/sentiment.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_config_serialization_round_trips() {
        let toml_str = toml::to_string(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("poll_interval_secs"));
        assert!(AppConfig::from_toml(&toml_str).is_ok());
    }
}
