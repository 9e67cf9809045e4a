//! CLI interface for coin-ticker
//!
//! Provides subcommands for:
//! - `fetch`: Fetch the ticker listing once and print it
//! - `watch`: Keep refreshing the listing on an interval
//! - `config`: Show configuration

mod fetch;
mod render;
mod watch;

pub use fetch::FetchArgs;
pub use render::{format_change, render_state};
pub use watch::WatchArgs;

use crate::config::FeedConfig;
use crate::fetcher::{FeedState, PriceFeedFetcher};
use crate::ticker::CoinloreClient;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;

#[derive(Parser, Debug)]
#[command(name = "coin-ticker")]
#[command(about = "Cryptocurrency ticker feed from the CoinLore API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the ticker listing once
    Fetch(FetchArgs),
    /// Refresh the ticker listing on an interval
    Watch(WatchArgs),
    /// Show configuration
    Config,
}

/// Build a fetcher backed by the CoinLore client
pub fn build_fetcher(
    feed: &FeedConfig,
    limit: Option<NonZeroUsize>,
) -> anyhow::Result<PriceFeedFetcher<CoinloreClient>> {
    let client = CoinloreClient::with_config(feed.client_config())?;
    Ok(PriceFeedFetcher::new(client, limit.unwrap_or(feed.limit)))
}

fn print_state(state: &FeedState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        print!("{}", render_state(state));
    }
    Ok(())
}
