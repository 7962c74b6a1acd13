//! Named display slots and the updates written into them.

use serde::Serialize;
use std::fmt;

/// A named location on the dashboard holding one line of label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotId {
    BtcPrice,
    BtcSentiment,
    EthPrice,
    EthSentiment,
    SpyPrice,
    SpySentiment,
    VixPrice,
    Pmi,
    Cbbi,
}

impl SlotId {
    pub const ALL: [SlotId; 9] = [
        SlotId::BtcPrice,
        SlotId::BtcSentiment,
        SlotId::EthPrice,
        SlotId::EthSentiment,
        SlotId::SpyPrice,
        SlotId::SpySentiment,
        SlotId::VixPrice,
        SlotId::Pmi,
        SlotId::Cbbi,
    ];

    /// Stable key used in JSON payloads and the HTML page.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BtcPrice => "btc_price",
            Self::BtcSentiment => "btc_sentiment",
            Self::EthPrice => "eth_price",
            Self::EthSentiment => "eth_sentiment",
            Self::SpyPrice => "spy_price",
            Self::SpySentiment => "spy_sentiment",
            Self::VixPrice => "vix_price",
            Self::Pmi => "pmi",
            Self::Cbbi => "cbbi",
        }
    }

    /// Label prefix shared by the placeholder and every rendered value.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::BtcPrice => "BTC Price",
            Self::BtcSentiment => "BTC Sentiment",
            Self::EthPrice => "ETH Price",
            Self::EthSentiment => "ETH Sentiment",
            Self::SpyPrice => "S&P 500",
            Self::SpySentiment => "S&P 500 Sentiment",
            Self::VixPrice => "VIX",
            Self::Pmi => "PMI",
            Self::Cbbi => "CBBI",
        }
    }

    /// Text shown before the first successful fetch.
    pub fn placeholder(&self) -> String {
        format!("{}: Loading...", self.prefix())
    }

    /// Full label text for a rendered value.
    pub fn render(&self, value: impl fmt::Display) -> String {
        format!("{}: {}", self.prefix(), value)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// New text for one slot, produced by an updater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotUpdate {
    pub slot: SlotId,
    pub text: String,
}

impl SlotUpdate {
    pub fn new(slot: SlotId, text: impl Into<String>) -> Self {
        Self {
            slot,
            text: text.into(),
        }
    }

    /// Update whose text is `"{prefix}: {value}"`.
    pub fn rendered(slot: SlotId, value: impl fmt::Display) -> Self {
        Self::new(slot, slot.render(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(SlotId::BtcPrice.placeholder(), "BTC Price: Loading...");
        assert_eq!(SlotId::SpyPrice.placeholder(), "S&P 500: Loading...");
        assert_eq!(SlotId::SpySentiment.placeholder(), "S&P 500 Sentiment: Loading...");
        assert_eq!(SlotId::Cbbi.placeholder(), "CBBI: Loading...");
    }

    #[test]
    fn test_rendered_update() {
        let update = SlotUpdate::rendered(SlotId::VixPrice, "22.70");
        assert_eq!(update.slot, SlotId::VixPrice);
        assert_eq!(update.text, "VIX: 22.70");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = SlotId::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SlotId::ALL.len());
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&SlotId::EthSentiment).unwrap();
        assert_eq!(json, "\"eth_sentiment\"");
    }
}
