//! Provider seams.
//!
//! The poll loop is generic over these traits so the real HTTP clients and
//! in-process fakes are interchangeable.

use std::future::Future;

use sentiment_core::{DailyBar, IndexTicker, PriceQuote, TradingPair};

use crate::error::FeedResult;
use crate::indicators::EconomicIndicators;

/// Latest ticker (last price + 24h change) for a crypto pair.
pub trait TickerSource {
    fn fetch_ticker(
        &self,
        pair: TradingPair,
    ) -> impl Future<Output = FeedResult<PriceQuote>> + Send;
}

/// Daily bars for an index ticker, scoped to the current trading day.
///
/// An empty vector means the provider had no bars; it is not an error at
/// this layer.
pub trait DailyBarSource {
    fn fetch_daily_bars(
        &self,
        ticker: IndexTicker,
    ) -> impl Future<Output = FeedResult<Vec<DailyBar>>> + Send;
}

/// Economic indicator readings (PMI and a sentiment index).
pub trait IndicatorSource {
    fn fetch_indicators(&self) -> impl Future<Output = FeedResult<EconomicIndicators>> + Send;
}
