//! Economic indicators.
//!
//! There is no live provider yet. `StaticIndicators` serves fixed
//! placeholder readings through the same `IndicatorSource` seam a real
//! integration would use, so the PMI and sentiment-index slots keep their
//! shape regardless of where the numbers come from.

use crate::error::FeedResult;
use crate::source::IndicatorSource;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// A single indicator value with its qualitative reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorReading {
    pub value: Decimal,
    /// e.g., "Expansion", "Greed".
    pub interpretation: String,
}

impl IndicatorReading {
    pub fn new(value: Decimal, interpretation: impl Into<String>) -> Self {
        Self {
            value,
            interpretation: interpretation.into(),
        }
    }
}

impl fmt::Display for IndicatorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.interpretation)
    }
}

/// Readings for the economic tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EconomicIndicators {
    /// Purchasing Managers' Index.
    pub pmi: IndicatorReading,
    /// Crypto fear & greed style sentiment index.
    pub sentiment_index: IndicatorReading,
}

/// Fixed placeholder readings. Makes no external call.
#[derive(Debug, Clone)]
pub struct StaticIndicators {
    readings: EconomicIndicators,
}

impl StaticIndicators {
    pub fn new(readings: EconomicIndicators) -> Self {
        Self { readings }
    }
}

impl Default for StaticIndicators {
    fn default() -> Self {
        Self::new(EconomicIndicators {
            pmi: IndicatorReading::new(dec!(50.2), "Expansion"),
            sentiment_index: IndicatorReading::new(dec!(65), "Greed"),
        })
    }
}

impl IndicatorSource for StaticIndicators {
    async fn fetch_indicators(&self) -> FeedResult<EconomicIndicators> {
        Ok(self.readings.clone())
    }
}
