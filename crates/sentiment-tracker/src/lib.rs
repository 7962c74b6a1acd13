//! Market Sentiment Tracker.
//!
//! Polls crypto, equity, and economic data sources on a fixed interval and
//! publishes one-line labels to the display board:
//! - crypto prices and 24h-change sentiment (BTC, ETH)
//! - S&P 500 close, VIX level, and VIX-banded market sentiment
//! - PMI and a market-cycle index (static readings)

pub mod app;
pub mod config;
pub mod error;
pub mod updaters;

pub use app::{Application, CycleReport};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use updaters::UpdaterKind;
