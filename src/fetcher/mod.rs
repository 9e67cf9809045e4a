//! Price feed fetcher
//!
//! Drives a [`TickerSource`] and publishes the outcome as a [`FeedState`].
//! Only one request may be in flight at a time: a trigger that arrives while a
//! fetch is running is rejected, never queued. A failed fetch keeps the
//! previously published records.

mod state;

pub use state::{FeedState, FetchOutcome};

use crate::telemetry;
use crate::ticker::TickerSource;
use chrono::Utc;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Fetches a bounded ticker listing and publishes it to consumers
pub struct PriceFeedFetcher<S> {
    source: S,
    limit: NonZeroUsize,
    state: watch::Sender<FeedState>,
    started: AtomicBool,
}

impl<S: TickerSource> PriceFeedFetcher<S> {
    /// Create an idle fetcher requesting at most `limit` records per fetch
    pub fn new(source: S, limit: NonZeroUsize) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        Self {
            source,
            limit,
            state,
            started: AtomicBool::new(false),
        }
    }

    pub fn limit(&self) -> NonZeroUsize {
        self.limit
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the current state
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Perform the initial fetch
    ///
    /// The first call accepted by the in-flight guard fetches. Calls made while
    /// another fetch is in flight are skipped without consuming the start, and
    /// every call after an accepted start returns [`FetchOutcome::Skipped`].
    pub async fn start(&self) -> FetchOutcome {
        if !self.try_begin(true) {
            tracing::debug!("Price feed already started or fetch in flight");
            telemetry::record_fetch(&FetchOutcome::Skipped, Duration::ZERO);
            return FetchOutcome::Skipped;
        }

        tracing::info!(limit = self.limit.get(), "Starting price feed");
        self.fetch().await
    }

    /// Fetch the listing unless a fetch is already in flight
    pub async fn trigger(&self) -> FetchOutcome {
        if !self.try_begin(false) {
            tracing::debug!("Fetch already in flight, ignoring trigger");
            telemetry::record_fetch(&FetchOutcome::Skipped, Duration::ZERO);
            return FetchOutcome::Skipped;
        }

        self.fetch().await
    }

    /// Set the in-flight flag unless a fetch is running
    ///
    /// `initial` also requires that the feed has not been started, and marks
    /// it started when accepted. Both checks run under the state lock.
    fn try_begin(&self, initial: bool) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_fetching || (initial && self.started.load(Ordering::Acquire)) {
                return false;
            }
            if initial {
                self.started.store(true, Ordering::Release);
            }
            state.is_fetching = true;
            true
        })
    }

    /// Run one accepted fetch and publish its outcome
    async fn fetch(&self) -> FetchOutcome {
        let _guard = InFlightGuard { state: &self.state };
        let started = Instant::now();
        let limit = self.limit.get();

        let outcome = match self.source.fetch_tickers(limit).await {
            Ok(mut records) => {
                if records.len() > limit {
                    tracing::warn!(
                        received = records.len(),
                        limit,
                        "Source returned more records than requested, truncating"
                    );
                    records.truncate(limit);
                }

                let count = records.len();
                self.state.send_modify(|state| {
                    state.is_fetching = false;
                    state.has_failed = false;
                    state.last_failure = None;
                    state.records = records;
                    state.last_updated = Some(Utc::now());
                });

                tracing::info!(count, "Ticker listing updated");
                FetchOutcome::Succeeded { count }
            }
            Err(err) => {
                let kind = err.kind();
                self.state.send_modify(|state| {
                    state.is_fetching = false;
                    state.has_failed = true;
                    state.last_failure = Some(kind);
                });

                tracing::warn!(
                    error = %err,
                    kind = kind.as_str(),
                    "Ticker fetch failed, keeping previous records"
                );
                FetchOutcome::Failed(kind)
            }
        };

        telemetry::record_fetch(&outcome, started.elapsed());
        outcome
    }
}

/// Clears the in-flight flag if the fetch future is dropped before publishing
struct InFlightGuard<'a> {
    state: &'a watch::Sender<FeedState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            let was_fetching = state.is_fetching;
            state.is_fetching = false;
            was_fetching
        });
    }
}
