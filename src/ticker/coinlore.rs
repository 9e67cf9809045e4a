//! CoinLore API client
//!
//! Fetches the ticker listing from `GET /tickers/?limit=N`. The response is an
//! object with a `data` array of coin entries whose numeric fields are
//! transmitted as strings.

use super::{TickerRecord, TickerSource};
use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// CoinLore API base URL
pub const COINLORE_API_URL: &str = "https://api.coinlore.net/api";

/// Configuration for the CoinLore client
#[derive(Debug, Clone)]
pub struct CoinloreConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinloreConfig {
    fn default() -> Self {
        Self {
            base_url: COINLORE_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the CoinLore ticker API
pub struct CoinloreClient {
    config: CoinloreConfig,
    client: Client,
}

impl CoinloreClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, FeedError> {
        Self::with_config(CoinloreConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: CoinloreConfig) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &CoinloreConfig {
        &self.config
    }

    /// Build the ticker listing URL
    pub fn ticker_url(&self) -> String {
        format!("{}/tickers/", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TickerSource for CoinloreClient {
    async fn fetch_tickers(&self, limit: usize) -> Result<Vec<TickerRecord>, FeedError> {
        let url = self.ticker_url();
        let started = Instant::now();

        tracing::debug!(url = %url, limit, "Fetching tickers from CoinLore");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let records = parse_tickers(&body)?;

        tracing::debug!(
            count = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched tickers"
        );

        Ok(records)
    }
}

/// Ticker listing envelope
#[derive(Debug, Deserialize)]
struct TickerListing {
    data: Vec<TickerRecord>,
}

/// Normalize a ticker listing body into records, preserving upstream order
///
/// Fails when the `data` array is missing, an entry lacks a required field,
/// or the same coin id appears twice.
pub fn parse_tickers(body: &str) -> Result<Vec<TickerRecord>, FeedError> {
    let listing: TickerListing = serde_json::from_str(body)?;

    {
        let mut seen = HashSet::with_capacity(listing.data.len());
        for record in &listing.data {
            if !seen.insert(record.id.as_str()) {
                return Err(FeedError::ResponseShape(format!(
                    "duplicate ticker id {}",
                    record.id
                )));
            }
        }
    }

    Ok(listing.data)
}
