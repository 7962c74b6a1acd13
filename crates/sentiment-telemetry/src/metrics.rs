//! Prometheus metrics for the sentiment tracker.
//!
//! Covers the poll loop only:
//! - cycles run and their duration
//! - per-updater outcomes and latency
//! - slot writes applied to the display board
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. Registration only fails on a
//! duplicate metric name, which is a programming error caught on first use.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_gauge_vec, register_histogram, register_histogram_vec,
    register_int_counter, CounterVec, Encoder, GaugeVec, Histogram, HistogramVec, IntCounter,
    TextEncoder,
};

use crate::error::{TelemetryError, TelemetryResult};

/// Total poll cycles started.
pub static POLL_CYCLES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("sentiment_poll_cycles_total", "Total poll cycles run").unwrap()
});

/// Wall-clock duration of a full poll cycle.
pub static POLL_CYCLE_DURATION_MS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "sentiment_poll_cycle_duration_ms",
        "Duration of a full poll cycle in milliseconds",
        vec![10.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 30000.0]
    )
    .unwrap()
});

/// Updater runs by outcome.
/// Labels: updater (crypto/equity/economic), outcome (ok/error)
pub static UPDATER_RUNS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "sentiment_updater_runs_total",
        "Total updater runs by outcome",
        &["updater", "outcome"]
    )
    .unwrap()
});

/// Updater latency, including every provider call it makes.
pub static UPDATER_LATENCY_MS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "sentiment_updater_latency_ms",
        "Updater latency in milliseconds",
        &["updater"],
        vec![1.0, 10.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0]
    )
    .unwrap()
});

/// Unix time of the last successful run per updater.
pub static UPDATER_LAST_SUCCESS: Lazy<GaugeVec> = Lazy::new(|| {
    register_gauge_vec!(
        "sentiment_updater_last_success_timestamp_seconds",
        "Unix time of the last successful updater run",
        &["updater"]
    )
    .unwrap()
});

/// Total slot writes applied to the display board.
pub static SLOT_WRITES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "sentiment_slot_writes_total",
        "Total display slot writes applied"
    )
    .unwrap()
});

/// Metrics facade.
pub struct Metrics;

impl Metrics {
    /// Record the start of a poll cycle.
    pub fn poll_cycle_started() {
        POLL_CYCLES_TOTAL.inc();
    }

    /// Record a completed poll cycle.
    pub fn poll_cycle_finished(duration_ms: f64) {
        POLL_CYCLE_DURATION_MS.observe(duration_ms);
    }

    /// Record a successful updater run.
    pub fn updater_ok(updater: &str, latency_ms: f64, now_unix_secs: f64) {
        UPDATER_RUNS_TOTAL.with_label_values(&[updater, "ok"]).inc();
        UPDATER_LATENCY_MS
            .with_label_values(&[updater])
            .observe(latency_ms);
        UPDATER_LAST_SUCCESS
            .with_label_values(&[updater])
            .set(now_unix_secs);
    }

    /// Record a failed updater run.
    pub fn updater_error(updater: &str, latency_ms: f64) {
        UPDATER_RUNS_TOTAL
            .with_label_values(&[updater, "error"])
            .inc();
        UPDATER_LATENCY_MS
            .with_label_values(&[updater])
            .observe(latency_ms);
    }

    /// Record slot writes applied in one batch.
    pub fn slot_writes(count: usize) {
        SLOT_WRITES_TOTAL.inc_by(count as u64);
    }

    /// Render the default registry in text exposition format.
    pub fn render() -> TelemetryResult<String> {
        let families = prometheus::gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| TelemetryError::Metrics(e.to_string()))
    }
}
