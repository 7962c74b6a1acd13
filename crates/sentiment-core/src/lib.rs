//! Core domain types for the market sentiment tracker.
//!
//! This crate provides the types shared by the feed clients, the poll loop
//! and the dashboard:
//! - `Price`: precision-safe price with currency rendering
//! - `TradingPair`, `IndexTicker`: the fixed instrument set
//! - `PriceQuote`, `DailyBar`: transient provider records
//! - `AssetSentiment`, `VolatilitySentiment`: threshold-derived labels
//! - `SlotId`, `SlotUpdate`: named display slots and their new text

pub mod decimal;
pub mod display;
pub mod error;
pub mod market;
pub mod sentiment;
pub mod types;

pub use decimal::{format_fixed, format_grouped, Price};
pub use display::{SlotId, SlotUpdate};
pub use error::{parse_decimal, CoreError, Result};
pub use market::{IndexTicker, TradingPair};
pub use sentiment::{AssetSentiment, VolatilitySentiment};
pub use types::{latest_close, DailyBar, PriceQuote};
