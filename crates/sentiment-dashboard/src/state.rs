//! Display board state.
//!
//! `DisplayBoard` is the single application display state: one text per
//! named slot. The poll loop is its only writer and writes once per cycle
//! through [`DisplayBoard::apply`]; the HTTP handlers and the broadcaster
//! only take snapshots.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use sentiment_core::{SlotId, SlotUpdate};

use crate::layout::TABS;
use crate::types::{BoardSnapshot, RowSnapshot, SlotSnapshot, TabSnapshot};

#[derive(Debug)]
struct BoardInner {
    slots: BTreeMap<SlotId, String>,
    version: u64,
    last_updated_ms: Option<i64>,
}

/// Shared handle to the display slots. Cloning is cheap.
#[derive(Clone)]
pub struct DisplayBoard {
    inner: Arc<RwLock<BoardInner>>,
}

impl DisplayBoard {
    /// Create a board with every slot showing its `Loading...` placeholder.
    pub fn new() -> Self {
        let slots = SlotId::ALL
            .iter()
            .map(|slot| (*slot, slot.placeholder()))
            .collect();

        Self {
            inner: Arc::new(RwLock::new(BoardInner {
                slots,
                version: 0,
                last_updated_ms: None,
            })),
        }
    }

    /// Apply a batch of updates under one write lock.
    ///
    /// Readers see either none or all of the batch. Slots not named in
    /// the batch keep their text. Returns the number of slots whose text
    /// changed; the version bumps only when that number is non-zero.
    pub fn apply<I>(&self, updates: I) -> usize
    where
        I: IntoIterator<Item = SlotUpdate>,
    {
        let mut inner = self.inner.write();
        let mut changed = 0;

        for update in updates {
            let entry = inner.slots.entry(update.slot).or_default();
            if *entry != update.text {
                *entry = update.text;
                changed += 1;
            }
        }

        if changed > 0 {
            inner.version += 1;
            inner.last_updated_ms = Some(Utc::now().timestamp_millis());
        }

        changed
    }

    /// Current text of a slot.
    pub fn text(&self, slot: SlotId) -> String {
        self.inner
            .read()
            .slots
            .get(&slot)
            .cloned()
            .unwrap_or_else(|| slot.placeholder())
    }

    /// Current board version.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Collect a full snapshot laid out by tab.
    pub fn collect_snapshot(&self) -> BoardSnapshot {
        let inner = self.inner.read();

        let tabs = TABS
            .iter()
            .map(|tab| TabSnapshot {
                id: tab.id,
                title: tab.title.to_string(),
                rows: tab
                    .rows
                    .iter()
                    .map(|row| RowSnapshot {
                        caption: row.caption.to_string(),
                        cells: row
                            .slots
                            .iter()
                            .map(|slot| SlotSnapshot {
                                slot: *slot,
                                text: inner
                                    .slots
                                    .get(slot)
                                    .cloned()
                                    .unwrap_or_else(|| slot.placeholder()),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        BoardSnapshot {
            timestamp_ms: Utc::now().timestamp_millis(),
            version: inner.version,
            last_updated_ms: inner.last_updated_ms,
            tabs,
        }
    }
}

impl Default for DisplayBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DisplayBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("DisplayBoard")
            .field("version", &inner.version)
            .field("last_updated_ms", &inner.last_updated_ms)
            .finish()
    }
}
