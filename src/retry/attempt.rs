//! One bounded attempt: fresh cancellation scope, armed deadline, transport call.

use super::classify;
use super::error::{ClassifiedError, ErrorKind, TransportError};
use crate::response::{self, FetchedBody, RawResponse};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs the request function once under a deadline of `timeout`.
///
/// A fresh [`CancellationToken`] is handed to the request function for this
/// attempt only; when the deadline fires first, the token is cancelled so
/// the caller's transport can abort the in-flight operation, and the outcome
/// is a `Timeout` error regardless of what the transport would have
/// reported. Dropping the sleep future disarms the timer on every exit path.
pub async fn run_attempt<F, Fut>(
    request: &mut F,
    timeout: Duration,
) -> Result<FetchedBody, ClassifiedError>
where
    F: FnMut(CancellationToken) -> Fut,
    Fut: Future<Output = Result<RawResponse, TransportError>>,
{
    let token = CancellationToken::new();
    let fut = request(token.clone());
    tokio::pin!(fut);
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    tokio::select! {
        res = &mut fut => match res {
            Ok(resp) => response::interpret(resp),
            Err(e) => {
                let kind = if token.is_cancelled() {
                    ErrorKind::Timeout
                } else {
                    classify::classify_transport_error(&e)
                };
                Err(ClassifiedError::transport(kind, e.to_string()))
            }
        },
        _ = &mut deadline => {
            token.cancel();
            Err(ClassifiedError::transport(
                ErrorKind::Timeout,
                classify::default_message(ErrorKind::Timeout),
            ))
        }
    }
}
