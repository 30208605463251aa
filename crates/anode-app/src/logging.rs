//! Logging setup for hosts embedding the prediction services
//!
//! The library only emits `tracing` events; a host calls [`init`] once.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default `info` level,
/// e.g. `RUST_LOG=anode_domain=debug` to see every skipped combination.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Debug-level subscriber writing through the test harness. Safe to call
/// from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
