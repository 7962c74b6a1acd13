//! Equity/index daily bar client.
//!
//! Queries the chart endpoint for the current day:
//! `GET /v8/finance/chart/{symbol}?range=1d&interval=1d`.
//! Closes arrive as JSON numbers, possibly `null` for bars that have not
//! printed yet; those are skipped.

use crate::client::{build_http_client, get_json, join_url};
use crate::error::{FeedError, FeedResult};
use crate::source::DailyBarSource;
use reqwest::Client;
use sentiment_core::{parse_decimal, DailyBar, IndexTicker};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Production chart endpoint host.
pub const DEFAULT_YAHOO_URL: &str = "https://query1.finance.yahoo.com";

const CHART_PATH: &str = "/v8/finance/chart";
const PROVIDER: &str = "yahoo";

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteSeries>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub close: Vec<Option<serde_json::Number>>,
}

/// Client for the chart endpoint.
pub struct YahooChartClient {
    /// HTTP client.
    client: Client,
    /// Base URL (e.g., "https://query1.finance.yahoo.com").
    base_url: String,
}

impl YahooChartClient {
    /// Create a new chart client.
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

impl DailyBarSource for YahooChartClient {
    async fn fetch_daily_bars(&self, ticker: IndexTicker) -> FeedResult<Vec<DailyBar>> {
        let url = join_url(&self.base_url, &format!("{CHART_PATH}/{}", ticker.symbol));
        debug!(%ticker, url = %url, "Fetching daily bars");

        let response: ChartResponse = get_json(
            &self.client,
            PROVIDER,
            &url,
            &[("range", "1d"), ("interval", "1d")],
        )
        .await?;

        parse_chart(ticker, response)
    }
}

/// Flatten a chart payload into bars with a non-null close, oldest first.
pub fn parse_chart(ticker: IndexTicker, response: ChartResponse) -> FeedResult<Vec<DailyBar>> {
    if let Some(error) = response.chart.error {
        return Err(FeedError::Provider(format!(
            "{ticker}: {} {}",
            error.code, error.description
        )));
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };

    let Some(series) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut bars = Vec::with_capacity(series.close.len());
    for (idx, close) in series.close.into_iter().enumerate() {
        let Some(close) = close else {
            continue;
        };
        let close = parse_decimal("close", &close.to_string())?;
        bars.push(DailyBar::new(result.timestamp.get(idx).copied(), close));
    }

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> FeedResult<Vec<DailyBar>> {
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        parse_chart(IndexTicker::VIX, response)
    }

    #[test]
    fn test_parse_chart() {
        let bars = parse(
            r#"{"chart":{"result":[{
                "meta":{"symbol":"^VIX","regularMarketPrice":22.7},
                "timestamp":[1718890200],
                "indicators":{"quote":[{"open":[21.9],"close":[22.7]}]}
            }],"error":null}}"#,
        )
        .unwrap();

        assert_eq!(bars, vec![DailyBar::new(Some(1718890200), dec!(22.7))]);
    }

    #[test]
    fn test_parse_chart_skips_null_close() {
        let bars = parse(
            r#"{"chart":{"result":[{
                "timestamp":[1,2,3],
                "indicators":{"quote":[{"close":[5400.25,null,5431]}]}
            }],"error":null}}"#,
        )
        .unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1], DailyBar::new(Some(3), dec!(5431)));
    }

    #[test]
    fn test_parse_chart_empty_series() {
        let bars = parse(
            r#"{"chart":{"result":[{"indicators":{"quote":[{}]}}],"error":null}}"#,
        )
        .unwrap();
        assert!(bars.is_empty());

        let bars = parse(r#"{"chart":{"result":[],"error":null}}"#).unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn test_parse_chart_provider_error() {
        let err = parse(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FeedError::Provider(msg) if msg.contains("Not Found")));
    }
}
