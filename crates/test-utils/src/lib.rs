pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary.
///
/// The loader only emits a `debug` event after a successful load, so the
/// default filter is `info` and that event stays hidden. Run with
/// `RUST_LOG=fabricmon_config=debug` to see which documents loaded; output
/// goes through the test writer and only shows for failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}
