//! Logging init: stderr subscriber with env-filter override.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. Honors `RUST_LOG`; defaults to
/// `info,refetch=debug`. Returns an error if a global subscriber is already
/// set; callers embedding their own subscriber should skip this entirely.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,refetch=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging init: {}", e))?;
    Ok(())
}
