//! Crypto exchange ticker client.
//!
//! Uses the public 24h rolling-window ticker:
//! `GET /api/v3/ticker/24hr?symbol=BTCUSDT`. Numeric fields arrive as
//! JSON strings and are parsed straight into `Decimal`.

use crate::client::{build_http_client, get_json, join_url};
use crate::error::{FeedError, FeedResult};
use crate::source::TickerSource;
use reqwest::Client;
use sentiment_core::{parse_decimal, Price, PriceQuote, TradingPair};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Production REST endpoint.
pub const DEFAULT_BINANCE_URL: &str = "https://api.binance.com";

const TICKER_PATH: &str = "/api/v3/ticker/24hr";
const PROVIDER: &str = "binance";

/// Raw 24h ticker. Only the fields the tracker reads are declared.
#[derive(Debug, Deserialize)]
pub struct RawTicker24h {
    pub symbol: String,
    #[serde(rename = "lastPrice", default)]
    pub last_price: Option<String>,
    #[serde(rename = "priceChangePercent", default)]
    pub price_change_percent: Option<String>,
}

/// Client for the exchange ticker endpoint.
pub struct BinanceClient {
    /// HTTP client.
    client: Client,
    /// REST base URL (e.g., "https://api.binance.com").
    base_url: String,
}

impl BinanceClient {
    /// Create a new ticker client.
    ///
    /// # Arguments
    /// * `base_url` - REST base URL (e.g., "https://api.binance.com")
    /// * `timeout` - per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FeedResult<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TickerSource for BinanceClient {
    async fn fetch_ticker(&self, pair: TradingPair) -> FeedResult<PriceQuote> {
        let symbol = pair.exchange_symbol();
        let url = join_url(&self.base_url, TICKER_PATH);
        debug!(%pair, url = %url, "Fetching 24h ticker");

        let raw: RawTicker24h =
            get_json(&self.client, PROVIDER, &url, &[("symbol", symbol.as_str())]).await?;

        parse_ticker(pair, raw)
    }
}

/// Convert a raw ticker into a quote keyed by the pair's base asset.
///
/// A missing or unparsable `lastPrice` is an error. A missing
/// `priceChangePercent` yields `change_pct_24h: None`.
pub fn parse_ticker(pair: TradingPair, raw: RawTicker24h) -> FeedResult<PriceQuote> {
    let expected = pair.exchange_symbol();
    if raw.symbol != expected {
        return Err(FeedError::Provider(format!(
            "ticker symbol mismatch: requested {expected}, got {}",
            raw.symbol
        )));
    }

    let last_raw = raw
        .last_price
        .as_deref()
        .ok_or_else(|| FeedError::MissingField {
            symbol: expected.clone(),
            field: "lastPrice",
        })?;
    let last = parse_decimal("lastPrice", last_raw)?;

    let change_pct_24h = raw
        .price_change_percent
        .as_deref()
        .map(|s| parse_decimal("priceChangePercent", s))
        .transpose()?;

    Ok(PriceQuote::new(pair.base, Price::new(last), change_pct_24h))
}
