//! Tracing bootstrap for embedding applications and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a global `tracing` subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
