//! Error types for sentiment-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Parse a provider's decimal string, naming the field on failure.
pub fn parse_decimal(field: &str, raw: &str) -> Result<rust_decimal::Decimal> {
    raw.trim()
        .parse::<rust_decimal::Decimal>()
        .map_err(|e| CoreError::InvalidNumber(format!("{field}={raw:?}: {e}")))
}
