//! Instrument identification.
//!
//! The tracker follows a fixed set of instruments: two crypto trading
//! pairs quoted on an exchange and two index tickers from an equity feed.

use serde::Serialize;
use std::fmt;

/// Crypto trading pair (e.g., BTC/USDT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TradingPair {
    pub base: &'static str,
    pub quote: &'static str,
}

impl TradingPair {
    pub const BTC_USDT: Self = Self::new("BTC", "USDT");
    pub const ETH_USDT: Self = Self::new("ETH", "USDT");

    pub const fn new(base: &'static str, quote: &'static str) -> Self {
        Self { base, quote }
    }

    /// Exchange wire symbol with no separator (`BTCUSDT`).
    pub fn exchange_symbol(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// Index ticker on the equity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexTicker {
    /// Provider symbol (e.g., `^GSPC`).
    pub symbol: &'static str,
    /// Display name used in label text (e.g., `S&P 500`).
    pub name: &'static str,
}

impl IndexTicker {
    /// Broad-market index.
    pub const SP500: Self = Self::new("^GSPC", "S&P 500");
    /// Volatility index.
    pub const VIX: Self = Self::new("^VIX", "VIX");

    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self { symbol, name }
    }
}

impl fmt::Display for IndexTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trading_pair_symbols() {
        assert_eq!(TradingPair::BTC_USDT.to_string(), "BTC/USDT");
        assert_eq!(TradingPair::BTC_USDT.exchange_symbol(), "BTCUSDT");
        assert_eq!(TradingPair::ETH_USDT.exchange_symbol(), "ETHUSDT");
    }

    #[test]
    fn test_index_ticker_display() {
        assert_eq!(IndexTicker::SP500.to_string(), "^GSPC");
        assert_eq!(IndexTicker::VIX.name, "VIX");
    }
}
