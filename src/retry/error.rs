//! Error types for the resilient request layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed classification of a request failure.
///
/// Drives both retry eligibility and user-facing messaging; callers branch
/// on this tag (e.g. redirect to login on `Unauthorized`) instead of raw
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Network-level failure (connection refused, DNS, etc.). No response reached us.
    Network,
    /// The per-attempt deadline expired, or the transport reported a timeout.
    Timeout,
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 400.
    Validation,
    /// HTTP 5xx.
    Server,
    /// Anything else (unrecognized status, malformed success body). Not retried.
    Unknown,
}

impl ErrorKind {
    /// True for kinds worth retrying: the failure may resolve on its own.
    /// Caller and authorization defects (4xx) never do.
    pub fn is_transient(self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Timeout | ErrorKind::Server)
    }
}

/// The single normalized error surfaced to callers.
///
/// `http_status == 0` means no response reached us (network failure or
/// aborted attempt). `data` carries the parsed error body when the server
/// sent one; it is never required for callers to branch correctly.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    pub message: String,
    pub kind: ErrorKind,
    pub http_status: u16,
    pub data: Option<Value>,
}

impl ClassifiedError {
    pub fn new(
        kind: ErrorKind,
        http_status: u16,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            http_status,
            data,
        }
    }

    /// Builds a transport-level error (`http_status = 0`). An empty message
    /// falls back to the taxonomy default so callers always see one.
    pub fn transport(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = super::classify::default_message(kind).to_string();
        }
        Self {
            message,
            kind,
            http_status: 0,
            data: None,
        }
    }
}

/// Failure reported by the injected transport before any response arrived.
/// Classified into [`ErrorKind`] by the attempt executor.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The transport's own timeout fired.
    #[error("transport timed out")]
    TimedOut,
    /// Connection could not be established (DNS, refused, reset).
    #[error("host unreachable: {0}")]
    Unreachable(String),
    /// Any other transport-level failure.
    #[error("transport failed: {0}")]
    Other(String),
}
