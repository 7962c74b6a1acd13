//! sentiment-dashboard - Presentation surface for the market sentiment tracker.
//!
//! Holds the display board (one text per named slot) and serves it as a
//! three-tab web page:
//!
//! - REST API for fetching the current board
//! - WebSocket pushing a fresh snapshot whenever the board changes
//! - Prometheus metrics endpoint
//! - Static HTML dashboard UI
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  market-sentiment process                    │
//! │                                                              │
//! │  ┌──────────────┐   one batch per cycle   ┌───────────────┐  │
//! │  │  Poll loop   │ ──────────────────────▶ │ DisplayBoard  │  │
//! │  └──────────────┘                         └───────┬───────┘  │
//! │                                                   │ snapshots│
//! │  ┌────────────────────────────────────────────────┼───────┐  │
//! │  │       axum HTTP Server (port 8080)             ▼       │  │
//! │  │  GET /             → Static HTML/JS (three tabs)       │  │
//! │  │  GET /api/snapshot → JSON board                        │  │
//! │  │  GET /metrics      → Prometheus text                   │  │
//! │  │  GET /ws           → WebSocket upgrade                 │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod broadcast;
mod config;
mod error;
mod layout;
mod server;
mod state;
mod types;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use layout::{RowLayout, TabId, TabLayout, TABS};
pub use server::{bind, serve};
pub use state::DisplayBoard;
pub use types::{BoardSnapshot, DashboardMessage, RowSnapshot, SlotSnapshot, TabSnapshot};
