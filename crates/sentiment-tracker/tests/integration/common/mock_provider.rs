//! Mock market data provider for integration tests.
//!
//! Serves both provider APIs from one axum server:
//! - `GET /api/v3/ticker/24hr?symbol=..` (exchange 24h ticker)
//! - `GET /v8/finance/chart/{symbol}` (index chart)
//!
//! Replies are configured per symbol and can be swapped between cycles.
//! Unconfigured symbols answer 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

/// Canned reply for one symbol.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    /// 200 with a non-JSON body.
    Text(String),
    Status(u16),
}

#[derive(Default)]
struct MockState {
    tickers: HashMap<String, Reply>,
    charts: HashMap<String, Reply>,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<MockState>>;

/// A mock provider server bound to an ephemeral port.
pub struct MockProvider {
    addr: SocketAddr,
    state: Shared,
    shutdown_tx: oneshot::Sender<()>,
}

impl MockProvider {
    /// Start a new mock provider on an available port.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state: Shared = Arc::new(Mutex::new(MockState::default()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new()
            .route("/api/v3/ticker/24hr", get(ticker))
            .route("/v8/finance/chart/{symbol}", get(chart))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            state,
            shutdown_tx,
        }
    }

    /// Base URL usable as both `binance_url` and `yahoo_url`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_ticker(&self, symbol: &str, reply: Reply) {
        self.state
            .lock()
            .await
            .tickers
            .insert(symbol.to_string(), reply);
    }

    pub async fn set_chart(&self, symbol: &str, reply: Reply) {
        self.state
            .lock()
            .await
            .charts
            .insert(symbol.to_string(), reply);
    }

    /// Requests received so far, as `ticker:SYMBOL` / `chart:SYMBOL`.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }

    /// Shutdown the server.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}

async fn ticker(State(state): State<Shared>, Query(query): Query<HashMap<String, String>>) -> Response {
    let symbol = query.get("symbol").cloned().unwrap_or_default();
    let mut state = state.lock().await;
    state.requests.push(format!("ticker:{symbol}"));
    reply(state.tickers.get(&symbol))
}

async fn chart(State(state): State<Shared>, Path(symbol): Path<String>) -> Response {
    let mut state = state.lock().await;
    state.requests.push(format!("chart:{symbol}"));
    reply(state.charts.get(&symbol))
}

fn reply(configured: Option<&Reply>) -> Response {
    match configured {
        Some(Reply::Json(body)) => Json(body.clone()).into_response(),
        Some(Reply::Text(body)) => body.clone().into_response(),
        Some(Reply::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// 24h ticker payload with string-encoded numbers, as the exchange sends.
pub fn ticker_json(symbol: &str, last_price: &str, change_pct: &str) -> Reply {
    Reply::Json(json!({
        "symbol": symbol,
        "priceChange": "0.00",
        "priceChangePercent": change_pct,
        "lastPrice": last_price,
        "volume": "12345.678",
    }))
}

/// Chart payload with one series of closes (`None` encodes as `null`).
pub fn chart_json(closes: &[Option<f64>]) -> Reply {
    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| 1_718_000_000 + i * 86_400)
        .collect();

    Reply::Json(json!({
        "chart": {
            "result": [{
                "meta": { "currency": "USD" },
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    }))
}

/// Chart payload carrying a provider-level error.
pub fn chart_error(code: &str, description: &str) -> Reply {
    Reply::Json(json!({
        "chart": {
            "result": null,
            "error": { "code": code, "description": description }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_starts() {
        let server = MockProvider::start().await;
        assert!(server.url().starts_with("http://127.0.0.1:"));
        assert!(server.requests().await.is_empty());
        server.shutdown();
    }
}
