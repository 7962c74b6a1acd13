//! Static tab layout: which slots appear where, under which caption.

use sentiment_core::SlotId;
use serde::Serialize;

/// Tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Crypto,
    Stock,
    Economic,
}

/// One grid row: a caption followed by one or more slots.
#[derive(Debug, Clone)]
pub struct RowLayout {
    pub caption: &'static str,
    pub slots: &'static [SlotId],
}

/// One tab of label rows.
#[derive(Debug, Clone)]
pub struct TabLayout {
    pub id: TabId,
    pub title: &'static str,
    pub rows: &'static [RowLayout],
}

/// The three tabs, in display order.
pub const TABS: [TabLayout; 3] = [
    TabLayout {
        id: TabId::Crypto,
        title: "Crypto Market",
        rows: &[
            RowLayout {
                caption: "Bitcoin",
                slots: &[SlotId::BtcPrice, SlotId::BtcSentiment],
            },
            RowLayout {
                caption: "Ethereum",
                slots: &[SlotId::EthPrice, SlotId::EthSentiment],
            },
        ],
    },
    TabLayout {
        id: TabId::Stock,
        title: "Stock Market",
        rows: &[
            RowLayout {
                caption: "S&P 500",
                slots: &[SlotId::SpyPrice, SlotId::SpySentiment],
            },
            RowLayout {
                caption: "VIX",
                slots: &[SlotId::VixPrice],
            },
        ],
    },
    TabLayout {
        id: TabId::Economic,
        title: "Economic Indicators",
        rows: &[
            RowLayout {
                caption: "Purchasing Managers' Index",
                slots: &[SlotId::Pmi],
            },
            RowLayout {
                caption: "Crypto Fear & Greed Index",
                slots: &[SlotId::Cbbi],
            },
        ],
    },
];
