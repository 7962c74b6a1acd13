//! Market data provider clients.
//!
//! Fetches the raw inputs for each poll cycle:
//! - crypto 24h tickers from the exchange REST API (`BinanceClient`)
//! - current-day index bars from the chart API (`YahooChartClient`)
//! - economic indicator readings (`StaticIndicators`, placeholder)
//!
//! Each provider sits behind a source trait so the poll loop can be driven
//! by fakes in tests.

pub mod binance;
pub mod client;
pub mod error;
pub mod indicators;
pub mod source;
pub mod yahoo;

pub use binance::{BinanceClient, DEFAULT_BINANCE_URL};
pub use client::{build_http_client, DEFAULT_TIMEOUT};
pub use error::{FeedError, FeedResult};
pub use indicators::{EconomicIndicators, IndicatorReading, StaticIndicators};
pub use source::{DailyBarSource, IndicatorSource, TickerSource};
pub use yahoo::{YahooChartClient, DEFAULT_YAHOO_URL};
