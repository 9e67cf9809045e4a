//! Feed error types

use serde::Serialize;
use thiserror::Error;

/// Errors raised while fetching or normalizing a ticker listing
#[derive(Debug, Error)]
pub enum FeedError {
    /// Request could not be sent or no complete response was received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream answered with a non-success status
    #[error("Ticker API error: {status} - {body}")]
    Status { status: u16, body: String },
    /// Response body did not match the expected listing shape
    #[error("Malformed ticker response: {0}")]
    ResponseShape(String),
}

impl FeedError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FeedError::Transport(_) => FailureKind::Transport,
            FeedError::Status { .. } => FailureKind::Status,
            FeedError::ResponseShape(_) => FailureKind::ResponseShape,
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::ResponseShape(err.to_string())
    }
}

/// Category of the last failed fetch, kept for consumers that want more than a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Status,
    ResponseShape,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Status => "status",
            FailureKind::ResponseShape => "response_shape",
        }
    }
}
