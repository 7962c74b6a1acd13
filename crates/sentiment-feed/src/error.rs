//! Feed error types.
//!
//! Every provider failure, from a refused connection to a series with no
//! bars, surfaces as a `FeedError`. Callers treat them uniformly: log the
//! error and keep whatever text the affected slots already show.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field {field} for {symbol}")]
    MissingField { symbol: String, field: &'static str },

    #[error("No data returned for {0}")]
    EmptySeries(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid number: {0}")]
    Number(#[from] sentiment_core::CoreError),
}

pub type FeedResult<T> = Result<T, FeedError>;
