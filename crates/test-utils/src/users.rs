//! Deterministic test keys.
use alloy::signers::local::PrivateKeySigner;
use std::sync::LazyLock;

/// Ten deterministic signers. Signer `n` has the private key `[n + 1; 32]`.
pub static TEST_SIGNERS: LazyLock<[PrivateKeySigner; 10]> = LazyLock::new(|| {
    core::array::from_fn(|i| {
        PrivateKeySigner::from_slice(&[i as u8 + 1; 32]).expect("valid test key")
    })
});
