//! Application error types.
//!
//! These are startup failures. Provider failures during a poll cycle are
//! `FeedError`s handled inside the loop and never reach this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(#[from] sentiment_feed::FeedError),

    #[error("Dashboard error: {0}")]
    Dashboard(#[from] sentiment_dashboard::DashboardError),
}

pub type AppResult<T> = Result<T, AppError>;
