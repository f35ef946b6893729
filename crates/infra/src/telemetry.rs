//! Telemetry setup
//!
//! Installs the global tracing subscriber. Filtering follows `RUST_LOG`
//! with an info-level default.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops because the
/// global default can only be set a single time.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
