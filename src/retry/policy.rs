use super::error::ErrorKind;
use std::time::Duration;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Linear backoff policy, supplied fresh per call.
///
/// Linear rather than exponential: each attempt already carries its own
/// timeout, so the worst-case latency of a call stays boundable and
/// predictable for UI-facing callers.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt (total attempts = max_retries + 1).
    pub max_retries: u32,
    /// Backoff unit; the wait before retry i+1 is `base_delay * (i + 1)`.
    pub base_delay: Duration,
    /// Deadline applied to each individual attempt.
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(1000),
            attempt_timeout: Duration::from_millis(10_000),
        }
    }
}

impl RetryPolicy {
    /// Decide whether to retry after a failed attempt.
    ///
    /// `attempt` is 0-based (0 = first attempt). Only transient kinds are
    /// eligible; `Unknown` fails fast rather than retrying blindly.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if !kind.is_transient() || attempt >= self.max_retries {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.base_delay.saturating_mul(attempt + 1))
    }
}
