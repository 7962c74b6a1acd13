//! Shared HTTP plumbing for the market data providers.
//!
//! Both providers are read-only public REST endpoints queried with GET.
//! This module owns client construction (timeout, user agent) and the
//! request → status check → JSON decode sequence they share.

use crate::error::{FeedError, FeedResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default timeout for provider requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like user agent. The equity chart endpoint rejects clients
/// without one.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) market-sentiment-tracker";

/// Maximum number of body bytes echoed into a status error.
const MAX_ERROR_BODY: usize = 256;

/// Build the HTTP client shared by a provider.
pub fn build_http_client(timeout: Duration) -> FeedResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FeedError::HttpClient(format!("Failed to create HTTP client: {e}")))
}

/// GET `url` with `query` and decode the JSON body.
///
/// Non-2xx responses become [`FeedError::Status`] with a truncated body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &'static str,
    url: &str,
    query: &[(&str, &str)],
) -> FeedResult<T> {
    let started = Instant::now();

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| FeedError::HttpClient(format!("HTTP request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let mut body = response.text().await.unwrap_or_default();
        truncate_on_char_boundary(&mut body, MAX_ERROR_BODY);
        return Err(FeedError::Status {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FeedError::HttpClient(format!("Failed to read response: {e}")))?;

    debug!(
        provider,
        url,
        elapsed_ms = started.elapsed().as_millis() as u64,
        bytes = bytes.len(),
        "Provider response received"
    );

    serde_json::from_slice(&bytes)
        .map_err(|e| FeedError::Parse(format!("{provider}: failed to parse response: {e}")))
}

fn truncate_on_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
