//! Main application orchestration.
//!
//! Owns the display board and the three provider sources, and drives the
//! poll loop:
//! - one cycle at startup, then one per `poll_interval_secs`
//! - updaters run in order (crypto, equity, economic), each isolated
//! - successful updates are applied to the board as a single batch
//! - the dashboard server reads the board on its own task

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::updaters::{update_crypto, update_economic, update_equity, UpdaterKind};
use sentiment_core::SlotId;
use sentiment_dashboard::DisplayBoard;
use sentiment_feed::{
    BinanceClient, DailyBarSource, IndicatorSource, StaticIndicators, TickerSource,
    YahooChartClient,
};
use sentiment_telemetry::Metrics;
use std::future::Future;
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

/// Outcome of one poll cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u64,
    pub succeeded: Vec<UpdaterKind>,
    pub failed: Vec<UpdaterKind>,
    /// Slots whose text actually changed.
    pub slots_changed: usize,
}

impl CycleReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main application.
pub struct Application<T = BinanceClient, B = YahooChartClient, I = StaticIndicators> {
    config: AppConfig,
    board: DisplayBoard,
    tickers: T,
    bars: B,
    indicators: I,
    cycles: u64,
}

impl Application {
    /// Create the application with the live HTTP providers.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let timeout = config.request_timeout();
        let tickers = BinanceClient::new(config.binance_url.clone(), timeout)?;
        let bars = YahooChartClient::new(config.yahoo_url.clone(), timeout)?;

        info!(
            binance_url = %tickers.base_url(),
            yahoo_url = %bars.base_url(),
            timeout_secs = config.request_timeout_secs,
            "Provider clients initialized"
        );

        Ok(Self::with_sources(
            config,
            tickers,
            bars,
            StaticIndicators::default(),
        ))
    }
}

impl<T, B, I> Application<T, B, I>
where
    T: TickerSource,
    B: DailyBarSource,
    I: IndicatorSource,
{
    /// Create the application with arbitrary sources.
    pub fn with_sources(config: AppConfig, tickers: T, bars: B, indicators: I) -> Self {
        Self {
            config,
            board: DisplayBoard::new(),
            tickers,
            bars,
            indicators,
            cycles: 0,
        }
    }

    /// Shared handle to the display board.
    pub fn board(&self) -> DisplayBoard {
        self.board.clone()
    }

    /// Number of cycles run so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run every updater once and apply the collected updates.
    ///
    /// A failing updater is logged and counted; its slots keep their
    /// previous text. Never returns an error.
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.cycles += 1;
        let cycle = self.cycles;
        let started = Instant::now();
        Metrics::poll_cycle_started();

        let mut report = CycleReport {
            cycle,
            ..CycleReport::default()
        };
        let mut batch = Vec::with_capacity(SlotId::ALL.len());

        for kind in UpdaterKind::ORDER {
            let updater_started = Instant::now();
            let result = match kind {
                UpdaterKind::Crypto => update_crypto(&self.tickers).await,
                UpdaterKind::Equity => update_equity(&self.bars).await,
                UpdaterKind::Economic => update_economic(&self.indicators).await,
            };
            let latency_ms = updater_started.elapsed().as_secs_f64() * 1000.0;

            match result {
                Ok(updates) => {
                    Metrics::updater_ok(kind.as_str(), latency_ms, unix_now_secs());
                    debug!(cycle, updater = %kind, slots = updates.len(), latency_ms, "Updater succeeded");
                    batch.extend(updates);
                    report.succeeded.push(kind);
                }
                Err(e) => {
                    Metrics::updater_error(kind.as_str(), latency_ms);
                    warn!(cycle, updater = %kind, error = %e, "Updater failed, keeping previous values");
                    report.failed.push(kind);
                }
            }
        }

        report.slots_changed = self.board.apply(batch);
        Metrics::slot_writes(report.slots_changed);

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        Metrics::poll_cycle_finished(elapsed_ms);

        info!(
            cycle,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            slots_changed = report.slots_changed,
            elapsed_ms,
            "Poll cycle complete"
        );

        report
    }

    /// Start the dashboard (if enabled) and poll until Ctrl-C.
    pub async fn run(mut self) -> AppResult<()> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Received shutdown signal");
        })
        .await
    }

    /// Start the dashboard (if enabled) and poll until `shutdown` resolves.
    ///
    /// The first cycle runs immediately. A cycle always finishes before the
    /// next tick is awaited, and ticks missed while it ran are delayed
    /// rather than replayed. `shutdown` is only observed between cycles.
    pub async fn run_until<F>(&mut self, shutdown: F) -> AppResult<()>
    where
        F: Future<Output = ()>,
    {
        let dashboard = self.start_dashboard().await?;

        let mut ticker = tokio::time::interval(self.config.poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::pin!(shutdown);

        info!(
            interval_secs = self.config.poll_interval_secs,
            "Starting poll loop"
        );

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
            }
        }

        if let Some(handle) = dashboard {
            handle.abort();
        }

        info!(cycles = self.cycles, "Shutdown complete");
        Ok(())
    }

    /// Bind the dashboard listener up front so a bind failure is fatal,
    /// then serve it on its own task.
    async fn start_dashboard(&self) -> AppResult<Option<JoinHandle<()>>> {
        let config = self.config.dashboard.clone();
        if !config.enabled {
            info!("Dashboard disabled");
            return Ok(None);
        }

        let listener = sentiment_dashboard::bind(&config).await?;

        let board = self.board.clone();
        let handle = tokio::spawn(async move {
            if let Err(e) = sentiment_dashboard::serve(listener, board, config).await {
                error!(error = %e, "Dashboard server stopped");
            }
        });

        Ok(Some(handle))
    }
}

fn unix_now_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}
