//! Structured logging and Prometheus metrics for the sentiment tracker.
//!
//! - tracing-subscriber setup (JSON in production, pretty in development)
//! - poll-cycle and provider metrics, rendered in text exposition format

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogFormat};
pub use metrics::Metrics;
