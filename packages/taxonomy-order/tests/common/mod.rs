//! Common test utilities for taxonomy-order
//!
//! Fixtures, assertions and an independent reachability oracle shared by the
//! integration and property tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;

/// Install a test subscriber once (`RUST_LOG=taxonomy_order=debug` to see logs)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
