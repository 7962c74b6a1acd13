//! Dashboard API types.
//!
//! These types are used for JSON serialization in REST and WebSocket APIs.

use sentiment_core::SlotId;
use serde::Serialize;

use crate::layout::TabId;

/// Full board snapshot (sent on connect, on change, and via REST).
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    /// Timestamp when snapshot was taken (Unix milliseconds).
    pub timestamp_ms: i64,
    /// Board version; bumps once per applied batch that changed text.
    pub version: u64,
    /// When the board last changed (Unix milliseconds), `None` before the
    /// first successful update.
    pub last_updated_ms: Option<i64>,
    /// Tabs in display order.
    pub tabs: Vec<TabSnapshot>,
}

impl BoardSnapshot {
    /// Text of `slot`, searching every tab.
    pub fn text(&self, slot: SlotId) -> Option<&str> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.rows.iter())
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.slot == slot)
            .map(|cell| cell.text.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
    pub rows: Vec<RowSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowSnapshot {
    pub caption: String,
    pub cells: Vec<SlotSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotSnapshot {
    pub slot: SlotId,
    pub text: String,
}

/// WebSocket message types (tagged enum for type safety).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardMessage {
    /// Full snapshot (sent on connect).
    Snapshot(BoardSnapshot),
    /// Board changed since the last broadcast.
    Update(BoardSnapshot),
}
