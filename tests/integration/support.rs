//! Shared test helpers: record builders and a minimal HTTP stub

use coin_ticker::{DecimalText, TickerRecord};
use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub fn record(id: &str, rank: u32, price: &str) -> TickerRecord {
    TickerRecord {
        id: id.to_string(),
        symbol: id.to_uppercase(),
        name: id.to_string(),
        rank: NonZeroU32::new(rank).unwrap(),
        price_usd: DecimalText::new(price),
        percent_change_24h: Some(DecimalText::new("1.00")),
        percent_change_1h: None,
        percent_change_7d: None,
        price_btc: None,
        market_cap_usd: None,
    }
}

pub const LISTING_BODY: &str = r#"{
    "data": [
        {"id": "90", "symbol": "BTC", "name": "Bitcoin", "nameid": "bitcoin", "rank": 1,
         "price_usd": "67012.55", "percent_change_24h": "1.20", "percent_change_1h": "-0.05",
         "percent_change_7d": "4.87", "price_btc": "1.00", "market_cap_usd": "1320181244390.12"},
        {"id": "80", "symbol": "ETH", "name": "Ethereum", "nameid": "ethereum", "rank": 2,
         "price_usd": "2900.43", "percent_change_24h": "2.37", "percent_change_1h": "0.00",
         "percent_change_7d": "-3.10"},
        {"id": "518", "symbol": "USDT", "name": "Tether", "nameid": "tether", "rank": 3,
         "price_usd": "1.000", "percent_change_24h": "0.01", "percent_change_1h": "0.00",
         "percent_change_7d": "0.02"}
    ],
    "info": {"coins_num": 13127, "time": 1717171717}
}"#;

/// HTTP server answering each connection with the next scripted response
///
/// The last response is repeated once the script runs out.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            let mut script = responses.into_iter();
            let mut last = None;

            while let Ok((mut socket, _)) = listener.accept().await {
                let (status, body) = match script.next().or(last) {
                    Some(response) => response,
                    None => break,
                };
                last = Some((status, body));

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = socket.read(&mut chunk).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let head = String::from_utf8_lossy(&buf);
                let request_line = head.lines().next().unwrap_or_default().to_string();
                seen.lock().unwrap().push(request_line);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}/api", addr),
            requests,
        }
    }

    /// Request lines received so far, e.g. `GET /api/tickers/?limit=3 HTTP/1.1`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Base URL of a port nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}
