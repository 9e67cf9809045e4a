//! Integration tests for the CoinLore client against a local HTTP stub

use crate::support::{closed_base_url, StubServer, LISTING_BODY};
use coin_ticker::cli::build_fetcher;
use coin_ticker::config::FeedConfig;
use coin_ticker::ticker::{CoinloreClient, CoinloreConfig};
use coin_ticker::{FailureKind, FetchOutcome, PriceFeedFetcher, TickerSource};
use std::num::NonZeroUsize;
use std::time::Duration;

fn client_for(base_url: &str) -> CoinloreClient {
    CoinloreClient::with_config(CoinloreConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_tickers_sends_limit() {
    let server = StubServer::start(vec![(200, LISTING_BODY)]).await;
    let client = client_for(&server.base_url);

    let records = client.fetch_tickers(3).await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].symbol, "ETH");
    assert_eq!(records[1].price_usd.as_str(), "2900.43");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].starts_with("GET /api/tickers/?limit=3 "),
        "unexpected request line: {}",
        requests[0]
    );
}

#[tokio::test]
async fn test_fetch_tickers_status_error() {
    let server = StubServer::start(vec![(503, r#"{"error": "maintenance"}"#)]).await;
    let client = client_for(&server.base_url);

    let err = client.fetch_tickers(3).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Status);
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_fetch_tickers_missing_data() {
    let server = StubServer::start(vec![(200, r#"{"info": {"coins_num": 0}}"#)]).await;
    let client = client_for(&server.base_url);

    let err = client.fetch_tickers(3).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::ResponseShape);
}

#[tokio::test]
async fn test_fetch_tickers_connection_refused() {
    let client = client_for(&closed_base_url().await);

    let err = client.fetch_tickers(3).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn test_fetcher_keeps_records_across_http_failures() {
    let server = StubServer::start(vec![
        (200, LISTING_BODY),
        (500, "oops"),
        (200, "not json"),
    ])
    .await;
    let fetcher = PriceFeedFetcher::new(client_for(&server.base_url), NonZeroUsize::new(3).unwrap());

    assert_eq!(fetcher.start().await, FetchOutcome::Succeeded { count: 3 });
    let populated = fetcher.state().records;

    assert_eq!(fetcher.trigger().await, FetchOutcome::Failed(FailureKind::Status));
    assert_eq!(fetcher.state().records, populated);

    assert_eq!(
        fetcher.trigger().await,
        FetchOutcome::Failed(FailureKind::ResponseShape)
    );
    let state = fetcher.state();
    assert!(state.has_failed);
    assert!(!state.is_fetching);
    assert_eq!(state.records, populated);
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn test_build_fetcher_from_config() {
    let server = StubServer::start(vec![(200, LISTING_BODY)]).await;
    let feed = FeedConfig {
        base_url: server.base_url.clone(),
        timeout_secs: 5,
        ..Default::default()
    };

    let fetcher = build_fetcher(&feed, NonZeroUsize::new(2)).unwrap();
    assert_eq!(fetcher.start().await, FetchOutcome::Succeeded { count: 2 });
    assert!(server.requests()[0].contains("limit=2"));

    let ids: Vec<String> = fetcher.state().records.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["90", "80"]);
}
