//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,sentiment=debug";

/// Output format, chosen from `RUST_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, with span context.
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// `production` selects JSON; anything else, or unset, is pretty.
    pub fn from_rust_env(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Initialize structured logging.
///
/// `RUST_LOG` overrides the default filter. Fails if a global subscriber
/// is already installed.
pub fn init_logging() -> TelemetryResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = LogFormat::from_rust_env(std::env::var("RUST_ENV").ok().as_deref());

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_names(true),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_format_from_rust_env() {
        assert_eq!(LogFormat::from_rust_env(Some("production")), LogFormat::Json);
        assert_eq!(LogFormat::from_rust_env(Some("PRODUCTION")), LogFormat::Json);
        assert_eq!(LogFormat::from_rust_env(Some("development")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_rust_env(None), LogFormat::Pretty);
    }
}
