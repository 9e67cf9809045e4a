//! Configuration types for coin-ticker

use crate::telemetry::LogFormat;
use crate::ticker::{CoinloreConfig, COINLORE_API_URL};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Ticker feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Base URL of the ticker API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of tickers requested per fetch
    #[serde(default = "default_limit")]
    pub limit: NonZeroUsize,

    /// HTTP request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Interval between refreshes in watch mode (seconds)
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_base_url() -> String {
    COINLORE_API_URL.to_string()
}
const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(limit) => limit,
    None => unreachable!(),
};

fn default_limit() -> NonZeroUsize {
    DEFAULT_LIMIT
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_refresh_interval_secs() -> u64 {
    30
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl FeedConfig {
    /// Client settings derived from this feed configuration
    pub fn client_config(&self) -> CoinloreConfig {
        CoinloreConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Port for the Prometheus exporter; disabled when unset
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the feed unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.feed.base_url.trim().is_empty(),
            "feed.base_url must not be empty"
        );
        anyhow::ensure!(self.feed.timeout_secs > 0, "feed.timeout_secs must be > 0");
        anyhow::ensure!(
            self.feed.refresh_interval_secs > 0,
            "feed.refresh_interval_secs must be > 0"
        );
        Ok(())
    }
}
