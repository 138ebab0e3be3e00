//! Common utilities for testing gasless components.

#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]

pub mod account;
pub mod provider;
pub mod token;
pub mod users;
pub mod verifier;

pub use gasless_constants::test_utils as test_constants;

/// Install a test `tracing` subscriber honoring `RUST_LOG`. Safe to call
/// from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
