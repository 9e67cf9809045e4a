//! Fetch metrics
//!
//! Recorded through the `metrics` facade; without an installed recorder the
//! calls are no-ops.

use crate::fetcher::FetchOutcome;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

const FETCH_TOTAL: &str = "coin_ticker_fetch_total";
const FETCH_SKIPPED_TOTAL: &str = "coin_ticker_fetch_skipped_total";
const FETCH_DURATION: &str = "coin_ticker_fetch_duration_seconds";
const RECORDS: &str = "coin_ticker_records";

/// Record the outcome of a trigger
///
/// Skipped triggers only bump the skip counter; they have no duration.
pub fn record_fetch(outcome: &FetchOutcome, duration: Duration) {
    match outcome {
        FetchOutcome::Succeeded { count } => {
            counter!(FETCH_TOTAL, "outcome" => "success").increment(1);
            gauge!(RECORDS).set(*count as f64);
        }
        FetchOutcome::Failed(kind) => {
            counter!(FETCH_TOTAL, "outcome" => kind.as_str()).increment(1);
        }
        FetchOutcome::Skipped => {
            counter!(FETCH_SKIPPED_TOTAL).increment(1);
            return;
        }
    }

    histogram!(FETCH_DURATION).record(duration.as_secs_f64());
}

/// Install the Prometheus exporter listening on `port`
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus metrics exporter listening");
    Ok(())
}
