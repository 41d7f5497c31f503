//! Tracing setup: stdout subscriber with an env-controlled filter.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Defaults to `info` when `RUST_LOG`
/// is unset. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
