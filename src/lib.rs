pub mod config;
pub mod logging;

// Core modules
pub mod report;
pub mod response;
pub mod retry;

pub use report::{user_message, Reporter};
pub use response::{interpret, FetchedBody, RawResponse};
pub use retry::{
    run_with_retry, ClassifiedError, ErrorKind, RetryPolicy, TransportError,
};
