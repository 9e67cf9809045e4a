//! coin-ticker: cryptocurrency ticker feed for the CoinLore price API
//!
//! This library provides:
//! - A CoinLore REST client that normalizes the ticker listing
//! - A price feed fetcher with an in-flight guard and observable state
//! - Configuration, logging and metrics setup
//! - The command-line front end

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod telemetry;
pub mod ticker;

pub use error::{FailureKind, FeedError};
pub use fetcher::{FeedState, FetchOutcome, PriceFeedFetcher};
pub use ticker::{CoinloreClient, DecimalText, TickerRecord, TickerSource};
