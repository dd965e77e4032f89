//! Classify HTTP statuses and transport errors into retry policy error kinds.

use super::error::{ErrorKind, TransportError};

/// Classify an HTTP status code. Total: every status maps to a kind.
pub fn classify_http_status(status: u16) -> ErrorKind {
    match status {
        400 => ErrorKind::Validation,
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        500..=u16::MAX => ErrorKind::Server,
        _ => ErrorKind::Unknown,
    }
}

/// Classify a transport-level failure (no response reached us).
pub fn classify_transport_error(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::TimedOut => ErrorKind::Timeout,
        TransportError::Unreachable(_) | TransportError::Other(_) => ErrorKind::Network,
    }
}

/// Fallback message per kind, used when the server sent no usable message.
pub fn default_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => "network request failed",
        ErrorKind::Timeout => "request timed out",
        ErrorKind::Unauthorized => "authentication required",
        ErrorKind::Forbidden => "access denied",
        ErrorKind::NotFound => "resource not found",
        ErrorKind::Validation => "invalid request",
        ErrorKind::Server => "server error",
        ErrorKind::Unknown => "unexpected error",
    }
}
