//! Fetch command implementation

use super::{build_fetcher, print_state};
use crate::config::Config;
use crate::fetcher::FetchOutcome;
use clap::Args;
use std::num::NonZeroUsize;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Override the configured number of tickers
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,

    /// Print the feed state as JSON
    #[arg(long)]
    pub json: bool,
}

impl FetchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let fetcher = build_fetcher(&config.feed, self.limit)?;

        let outcome = fetcher.start().await;
        print_state(&fetcher.state(), self.json)?;

        if let FetchOutcome::Failed(kind) = outcome {
            anyhow::bail!("Ticker fetch failed ({})", kind.as_str());
        }

        Ok(())
    }
}
