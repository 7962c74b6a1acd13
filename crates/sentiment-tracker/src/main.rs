//! Market Sentiment Tracker - Entry Point

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Market Sentiment Tracker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via SENTIMENT_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    sentiment_telemetry::init_logging()?;

    info!("Starting Market Sentiment Tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = sentiment_tracker::AppConfig::load(args.config.as_deref())?;
    info!(
        poll_interval_secs = config.poll_interval_secs,
        dashboard = config.dashboard.enabled,
        "Configuration loaded"
    );

    let app = sentiment_tracker::Application::new(config)?;
    app.run().await?;

    Ok(())
}
