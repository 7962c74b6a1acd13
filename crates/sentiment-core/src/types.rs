//! Market data records produced by the providers.
//!
//! Every record is transient: recomputed on each poll cycle and dropped
//! once its label text has been rendered.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::Price;

/// Latest ticker for a crypto pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// Display symbol (e.g., "BTC").
    pub symbol: String,
    /// Last traded price.
    pub last: Price,
    /// Percent change over the trailing 24 hours.
    /// `None` when the provider omits the statistic.
    pub change_pct_24h: Option<Decimal>,
}

impl PriceQuote {
    pub fn new(symbol: impl Into<String>, last: Price, change_pct_24h: Option<Decimal>) -> Self {
        Self {
            symbol: symbol.into(),
            last,
            change_pct_24h,
        }
    }
}

/// One daily bar from the equity feed. Only the close is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyBar {
    /// Bar open time (Unix seconds), when the provider reports one.
    pub timestamp: Option<i64>,
    /// Closing (or latest) price.
    pub close: Decimal,
}

impl DailyBar {
    pub fn new(timestamp: Option<i64>, close: Decimal) -> Self {
        Self { timestamp, close }
    }
}

/// Most recent close from a bar series, if any.
pub fn latest_close(bars: &[DailyBar]) -> Option<Decimal> {
    bars.last().map(|bar| bar.close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_latest_close_uses_last_bar() {
        let bars = vec![
            DailyBar::new(Some(1_700_000_000), dec!(21.3)),
            DailyBar::new(Some(1_700_086_400), dec!(22.7)),
        ];
        assert_eq!(latest_close(&bars), Some(dec!(22.7)));
    }

    #[test]
    fn test_latest_close_empty() {
        assert_eq!(latest_close(&[]), None);
    }
}
