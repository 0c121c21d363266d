// Common test utilities
#![allow(dead_code)]

pub mod fake_federal_register;
pub mod fixtures;
pub mod http;

pub use fake_federal_register::*;
pub use fixtures::*;
pub use http::*;

/// Route tracing output through the test harness.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
