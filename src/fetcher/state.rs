//! Observable feed state

use crate::error::FailureKind;
use crate::ticker::TickerRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// State published by the fetcher to its consumers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedState {
    /// A request is currently in flight
    pub is_fetching: bool,
    /// The most recent fetch failed
    pub has_failed: bool,
    /// Records from the last successful fetch, in upstream order
    pub records: Vec<TickerRecord>,
    /// Category of the most recent failure
    pub last_failure: Option<FailureKind>,
    /// When `records` was last replaced
    pub last_updated: Option<DateTime<Utc>>,
}

impl FeedState {
    /// True when records are present but the latest refresh failed
    pub fn is_stale(&self) -> bool {
        self.has_failed && !self.records.is_empty()
    }
}

/// Result of a single trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch was already in flight (or the fetcher was already started)
    Skipped,
    /// Records were replaced
    Succeeded { count: usize },
    /// The fetch failed and the previous records were kept
    Failed(FailureKind),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Succeeded { .. })
    }
}
