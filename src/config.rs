//! Serde-embeddable configuration for the request layer.
//!
//! Host applications can carry a `[retry]` / `[report]` section in their own
//! config file and convert it into the runtime types. All fields default, so
//! a missing or partial section is valid.

use crate::report::Reporter;
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_max_retries() -> u32 {
    2
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Retry policy parameters in raw milliseconds, as they appear in config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Number of retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Backoff unit in milliseconds (wait before retry i+1 is this times i+1).
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Per-attempt deadline in milliseconds. Clamped to at least 1.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
            attempt_timeout: Duration::from_millis(self.timeout_ms.max(1)),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Error reporting toggles, as they appear in config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Log terminal failures via `tracing`.
    #[serde(default = "default_true")]
    pub log_errors: bool,
    /// Invoke the notify sink on terminal failures.
    #[serde(default = "default_true")]
    pub notify_user: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_errors: true,
            notify_user: true,
        }
    }
}

impl ReportConfig {
    pub fn reporter(&self) -> Reporter {
        Reporter::new()
            .log_errors(self.log_errors)
            .notify_user(self.notify_user)
    }
}
