//! Retry and backoff policy.
//!
//! This module encapsulates error classification (timeouts, connection
//! failures, HTTP statuses), per-attempt execution under a cancellable
//! deadline, and linear backoff decisions so that every caller shares a
//! consistent resilience policy and sees a single error shape.

mod attempt;
mod classify;
mod error;
mod policy;
mod run;

pub use attempt::run_attempt;
pub use classify::{classify_http_status, classify_transport_error, default_message};
pub use error::{ClassifiedError, ErrorKind, TransportError};
pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;
