//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Honors
/// `RUST_LOG`; falls back to `info` plus debug-level selection transitions.
pub fn init() {
    init_with("info,atelier_storefront=debug");
}

/// Initialize with an explicit fallback filter (used when `RUST_LOG` is not
/// set). Test harnesses pass a quieter filter here.
pub fn init_with(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
