//! Ticker source module
//!
//! Fetches the current coin listing from the CoinLore ticker API

mod coinlore;
mod types;

pub use coinlore::{parse_tickers, CoinloreClient, CoinloreConfig, COINLORE_API_URL};
pub use types::{DecimalText, TickerRecord};

use crate::error::FeedError;
use async_trait::async_trait;

/// Trait for ticker listing sources
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Fetch at most `limit` tickers in upstream order
    async fn fetch_tickers(&self, limit: usize) -> Result<Vec<TickerRecord>, FeedError>;
}
