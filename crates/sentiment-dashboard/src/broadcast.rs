//! WebSocket broadcast functionality.
//!
//! The broadcaster checks the board version at a fixed interval and, when
//! it moved, broadcasts a fresh snapshot to every connected client.

use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::state::DisplayBoard;
use crate::types::DashboardMessage;

/// Run the broadcaster task.
pub async fn run_broadcaster(board: DisplayBoard, tx: broadcast::Sender<String>, interval_ms: u64) {
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    // Starts at the pristine version so a board written before the first
    // tick is still broadcast.
    let mut last_version = 0;

    loop {
        interval.tick().await;

        if let Some(json) = poll_change(&board, &mut last_version) {
            match tx.send(json) {
                Ok(n) => trace!(receivers = n, version = last_version, "Board update sent"),
                // No receivers - normal when no clients are connected
                Err(_) => trace!("No WebSocket receivers connected"),
            }
        }
    }
}

/// Serialize an update if the board changed since `last_version`.
fn poll_change(board: &DisplayBoard, last_version: &mut u64) -> Option<String> {
    let version = board.version();
    if version == *last_version {
        return None;
    }

    let snapshot = board.collect_snapshot();
    *last_version = snapshot.version;

    match serde_json::to_string(&DashboardMessage::Update(snapshot)) {
        Ok(json) => Some(json),
        Err(e) => {
            debug!(error = %e, "Failed to serialize dashboard update");
            None
        }
    }
}
