//! Log capture for tests.

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness so it shows up only for
/// failing tests. Safe to call from every test; only the first call installs
/// the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
