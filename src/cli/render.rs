//! Plain-text rendering of the feed state

use crate::fetcher::FeedState;
use crate::ticker::{DecimalText, TickerRecord};
use std::fmt::Write;

const HEADER: [&str; 7] = ["#", "SYMBOL", "NAME", "PRICE (USD)", "1H", "24H", "7D"];

/// Render the state as a table followed by a status line
pub fn render_state(state: &FeedState) -> String {
    let mut out = String::new();

    if state.records.is_empty() {
        out.push_str("No tickers available\n");
    } else {
        let _ = writeln!(out, "{}", format_row(HEADER.map(String::from)));
        for record in &state.records {
            let _ = writeln!(out, "{}", format_row(record_cells(record)));
        }
    }

    if let Some(line) = status_line(state) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn record_cells(record: &TickerRecord) -> [String; 7] {
    [
        record.rank.to_string(),
        record.symbol.clone(),
        record.name.clone(),
        record.price_usd.to_string(),
        format_change(record.percent_change_1h.as_ref()),
        format_change(record.percent_change_24h.as_ref()),
        format_change(record.percent_change_7d.as_ref()),
    ]
}

fn format_row(cells: [String; 7]) -> String {
    let [rank, symbol, name, price, h1, h24, d7] = cells;
    format!("{rank:<4} {symbol:<8} {name:<16} {price:>14} {h1:>9} {h24:>9} {d7:>9}")
        .trim_end()
        .to_string()
}

/// Percentage change with a direction marker; unknown values are shown as n/a
pub fn format_change(change: Option<&DecimalText>) -> String {
    match change {
        None => "n/a".to_string(),
        Some(value) if value.to_decimal().is_ok_and(|d| d.is_zero()) => {
            format!("{}%", value.as_str().trim().trim_start_matches(['-', '+']))
        }
        Some(value) if value.is_negative() => format!("▼{}%", value.as_str().trim_start_matches('-')),
        Some(value) => format!("▲{}%", value),
    }
}

fn status_line(state: &FeedState) -> Option<String> {
    if state.is_fetching {
        return Some("Fetching...".to_string());
    }

    let kind = state.last_failure.map(|k| k.as_str()).unwrap_or("unknown");
    if state.is_stale() {
        Some(format!("Last refresh failed ({kind}), showing previous data"))
    } else if state.has_failed {
        Some(format!("Fetch failed ({kind})"))
    } else {
        state
            .last_updated
            .map(|ts| format!("Updated {}", ts.format("%Y-%m-%d %H:%M:%S UTC")))
    }
}
