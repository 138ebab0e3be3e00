/// Ethereum Sepolia testnet constants.
pub mod sepolia;

/// Arbitrum Sepolia testnet constants.
pub mod arbitrum_sepolia;

/// Test utilities for chains.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
