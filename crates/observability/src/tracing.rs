//! Tracing subscriber wiring.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines, filter configurable via
/// `RUST_LOG` (defaults to `info`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
