//! Sentiment labels derived from a single numeric signal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Asset sentiment from the sign of the 24h percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssetSentiment {
    Bullish,
    Bearish,
}

impl AssetSentiment {
    /// `Bullish` only for a strictly positive change; flat counts as bearish.
    pub fn from_change_pct(change_pct: Decimal) -> Self {
        if change_pct > Decimal::ZERO {
            Self::Bullish
        } else {
            Self::Bearish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
        }
    }
}

impl fmt::Display for AssetSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equity market sentiment read off the volatility index level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VolatilitySentiment {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
}

/// Upper bounds (exclusive), evaluated low to high. First match wins;
/// anything at or above the last bound is `VeryBearish`.
const VOLATILITY_BANDS: [(Decimal, VolatilitySentiment); 4] = [
    (dec!(15), VolatilitySentiment::VeryBullish),
    (dec!(20), VolatilitySentiment::Bullish),
    (dec!(30), VolatilitySentiment::Neutral),
    (dec!(40), VolatilitySentiment::Bearish),
];

impl VolatilitySentiment {
    /// Classify a volatility index level.
    pub fn from_level(level: Decimal) -> Self {
        VOLATILITY_BANDS
            .iter()
            .find(|(upper, _)| level < *upper)
            .map(|(_, sentiment)| *sentiment)
            .unwrap_or(Self::VeryBearish)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryBullish => "Very Bullish",
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
            Self::VeryBearish => "Very Bearish",
        }
    }
}

impl fmt::Display for VolatilitySentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
