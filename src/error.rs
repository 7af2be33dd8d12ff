use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds for a reputation check, one per pipeline stage.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally and all failures are recoverable by the caller.
#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("received non-200 response ({status}): {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DetectorError>;
