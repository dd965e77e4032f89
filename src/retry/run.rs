//! Retry loop: run attempts until success or the policy says stop.

use super::attempt::run_attempt;
use super::classify;
use super::error::{ClassifiedError, ErrorKind, TransportError};
use super::policy::{RetryDecision, RetryPolicy};
use crate::response::{FetchedBody, RawResponse};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Runs the request function until it succeeds or the policy says to stop.
///
/// Each attempt gets a fresh cancellation token and its own deadline of
/// `policy.attempt_timeout`. On a retry-eligible failure, `on_retry` is
/// invoked with the 1-based number of the attempt that just failed, then the
/// loop sleeps for the linear backoff delay before the next attempt. The
/// terminal outcome is always a [`ClassifiedError`], never a raw transport
/// error.
pub async fn run_with_retry<F, Fut, R>(
    policy: &RetryPolicy,
    mut request: F,
    mut on_retry: R,
) -> Result<FetchedBody, ClassifiedError>
where
    F: FnMut(CancellationToken) -> Fut,
    Fut: Future<Output = Result<RawResponse, TransportError>>,
    R: FnMut(u32, &ClassifiedError),
{
    let mut attempt = 0u32;
    loop {
        match run_attempt(&mut request, policy.attempt_timeout).await {
            Ok(value) => return Ok(value),
            Err(err) => match policy.decide(attempt, err.kind) {
                RetryDecision::NoRetry => return Err(finalize(err)),
                RetryDecision::RetryAfter(delay) => {
                    on_retry(attempt + 1, &err);
                    tracing::debug!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        kind = ?err.kind,
                        "transient failure, retrying: {}",
                        err
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            },
        }
    }
}

/// Ensures the terminal error always carries a message. Transport-level
/// errors with no text default to the network message.
fn finalize(mut err: ClassifiedError) -> ClassifiedError {
    if err.message.is_empty() {
        let kind = if err.http_status == 0 {
            ErrorKind::Network
        } else {
            err.kind
        };
        err.message = classify::default_message(kind).to_string();
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_defaults_empty_transport_message_to_network() {
        let err = ClassifiedError {
            message: String::new(),
            kind: ErrorKind::Timeout,
            http_status: 0,
            data: None,
        };
        let out = finalize(err);
        assert_eq!(out.message, classify::default_message(ErrorKind::Network));
    }

    #[test]
    fn finalize_keeps_existing_message() {
        let err = ClassifiedError::new(ErrorKind::Server, 500, "upstream exploded", None);
        assert_eq!(finalize(err).message, "upstream exploded");
    }
}
