//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Logs go to stderr so command output on stdout stays clean. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
