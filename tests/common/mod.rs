//! Common test utilities for integration tests.
//!
//! Provides in-memory mock stores and a scenario builder for setting up
//! conferences, areas, messages, and files without a real host.

// Each integration test binary compiles this module; not all of them use
// every helper.
#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Once;

use newscan::{ScanConfig, User};

static INIT_TRACING: Once = Once::new();

/// Route engine logs to the test output, honoring `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The user every scenario runs as.
pub fn test_user() -> User {
    User::new(1, "tester")
}

/// A config with no omissions.
pub fn default_config() -> ScanConfig {
    ScanConfig::default()
}
