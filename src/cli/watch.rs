//! Watch command implementation

use super::{build_fetcher, print_state};
use crate::config::Config;
use clap::Args;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Override the configured number of tickers
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,

    /// Seconds between refreshes (defaults to feed.refresh_interval_secs)
    #[arg(short, long)]
    pub interval_secs: Option<u64>,

    /// Stop after this many refreshes
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Print each state as JSON
    #[arg(long)]
    pub json: bool,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let fetcher = build_fetcher(&config.feed, self.limit)?;
        let interval = self
            .interval_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.feed.refresh_interval())
            .max(Duration::from_secs(1));

        fetcher.start().await;
        print_state(&fetcher.state(), self.json)?;

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        let mut refreshes = 0u64;
        while self.count.map_or(true, |max| refreshes < max) {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, stopping watch");
                    break;
                }
            }

            fetcher.trigger().await;
            refreshes += 1;
            print_state(&fetcher.state(), self.json)?;
        }

        tracing::info!(refreshes, "Watch finished");
        Ok(())
    }
}
