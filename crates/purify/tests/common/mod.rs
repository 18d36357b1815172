#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Shared test setup.

/// Install a tracing subscriber once, so the warn/debug paths in the library
/// run against a real subscriber during tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
