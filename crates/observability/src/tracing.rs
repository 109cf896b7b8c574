//! Tracing/logging initialization.
//!
//! The purchase pipeline itself is pure; the interesting events come from the
//! gateway adapters (payment captured, seats reserved).

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs, configurable via RUST_LOG; events flattened for shippers.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_target(false)
        .try_init();
}
