//! Terminal-failure observation: logging, user notification, caller hook.
//!
//! Wraps the retry loop without altering its control flow: a call that
//! recovers after retries triggers nothing here, a terminal failure is
//! observed once and then returned unchanged to the caller.

use crate::response::{FetchedBody, RawResponse};
use crate::retry::{run_with_retry, ClassifiedError, ErrorKind, RetryPolicy, TransportError};
use std::future::Future;
use tokio_util::sync::CancellationToken;

type NotifySink = Box<dyn Fn(ErrorKind, &str) + Send + Sync>;
type ErrorHook = Box<dyn Fn(&ClassifiedError) + Send + Sync>;

/// Maps each error kind to a short, non-technical message suitable for
/// end-user display. Technical detail stays in `ClassifiedError::data` and
/// the logs.
pub fn user_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => "A connectivity problem occurred. Check your connection and try again.",
        ErrorKind::Timeout => "The request took too long. Please try again.",
        ErrorKind::Unauthorized => "Please sign in to continue.",
        ErrorKind::Forbidden => "You don't have permission to do that.",
        ErrorKind::NotFound => "We couldn't find what you were looking for.",
        ErrorKind::Validation => "Some of the provided information is invalid.",
        ErrorKind::Server => "A temporary server issue occurred. Please try again shortly.",
        ErrorKind::Unknown => "Something went wrong. Please try again.",
    }
}

/// Side-effect layer around the retry loop. Holds process-wide, read-only
/// configuration; no per-call mutable state.
pub struct Reporter {
    log_errors: bool,
    notify_user: bool,
    notify: Option<NotifySink>,
    on_error: Option<ErrorHook>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            log_errors: true,
            notify_user: true,
            notify: None,
            on_error: None,
        }
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether terminal failures are logged via `tracing`.
    pub fn log_errors(mut self, enabled: bool) -> Self {
        self.log_errors = enabled;
        self
    }

    /// Whether the notify sink is invoked on terminal failures.
    pub fn notify_user(mut self, enabled: bool) -> Self {
        self.notify_user = enabled;
        self
    }

    /// Sink receiving `(kind, user_message(kind))` on terminal failure,
    /// e.g. a toast dispatcher. Without a sink nothing is shown.
    pub fn with_notify(mut self, f: impl Fn(ErrorKind, &str) + Send + Sync + 'static) -> Self {
        self.notify = Some(Box::new(f));
        self
    }

    /// Caller hook invoked once with the terminal error.
    pub fn with_error_hook(mut self, f: impl Fn(&ClassifiedError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Runs the retry loop and observes its terminal failure, if any.
    /// The error is always returned to the caller unchanged.
    pub async fn run<F, Fut, R>(
        &self,
        policy: &RetryPolicy,
        request: F,
        on_retry: R,
    ) -> Result<FetchedBody, ClassifiedError>
    where
        F: FnMut(CancellationToken) -> Fut,
        Fut: Future<Output = Result<RawResponse, TransportError>>,
        R: FnMut(u32, &ClassifiedError),
    {
        match run_with_retry(policy, request, on_retry).await {
            Ok(value) => Ok(value),
            Err(err) => {
                self.observe(&err);
                Err(err)
            }
        }
    }

    fn observe(&self, err: &ClassifiedError) {
        if self.log_errors {
            tracing::error!(
                kind = ?err.kind,
                http_status = err.http_status,
                "request failed: {}",
                err.message
            );
        }
        if self.notify_user {
            if let Some(notify) = &self.notify {
                notify(err.kind, user_message(err.kind));
            }
        }
        if let Some(hook) = &self.on_error {
            hook(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn not_found() -> RawResponse {
        RawResponse::new(404, vec![], String::new())
    }

    fn quick_policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(10),
            attempt_timeout: Duration::from_millis(100),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_failure_observed_once() {
        let notified: Arc<Mutex<Vec<(ErrorKind, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let hooked = Arc::new(AtomicU32::new(0));

        let notified_in = Arc::clone(&notified);
        let hooked_in = Arc::clone(&hooked);
        let reporter = Reporter::new()
            .log_errors(false)
            .with_notify(move |kind, msg| {
                notified_in.lock().unwrap().push((kind, msg.to_string()));
            })
            .with_error_hook(move |_err| {
                hooked_in.fetch_add(1, Ordering::Relaxed);
            });

        let err = reporter
            .run(
                &quick_policy(),
                |_token| async { Ok(not_found()) },
                |_, _| {},
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(hooked.load(Ordering::Relaxed), 1);
        let notified = notified.lock().unwrap();
        assert_eq!(notified.len(), 1);
        assert_eq!(notified[0].0, ErrorKind::NotFound);
        assert_eq!(notified[0].1, user_message(ErrorKind::NotFound));
    }

    #[tokio::test(start_paused = true)]
    async fn success_triggers_no_observation() {
        let hooked = Arc::new(AtomicU32::new(0));
        let hooked_in = Arc::clone(&hooked);
        let reporter = Reporter::new()
            .log_errors(false)
            .with_error_hook(move |_| {
                hooked_in.fetch_add(1, Ordering::Relaxed);
            });

        let out = reporter
            .run(
                &quick_policy(),
                |_token| async {
                    Ok(RawResponse::new(200, vec![], "ok".into()))
                },
                |_, _| {},
            )
            .await;

        assert!(out.is_ok());
        assert_eq!(hooked.load(Ordering::Relaxed), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn notify_suppressed_when_disabled() {
        let notified = Arc::new(AtomicU32::new(0));
        let notified_in = Arc::clone(&notified);
        let reporter = Reporter::new()
            .log_errors(false)
            .notify_user(false)
            .with_notify(move |_, _| {
                notified_in.fetch_add(1, Ordering::Relaxed);
            });

        let _ = reporter
            .run(
                &quick_policy(),
                |_token| async { Ok(not_found()) },
                |_, _| {},
            )
            .await;

        assert_eq!(notified.load(Ordering::Relaxed), 0);
    }
}
