//! Constants for the Arbitrum Sepolia testnet.

use crate::{ChainConstants, ENTRY_POINT_V08, SIMPLE_7702_DELEGATE};
use alloy::primitives::{address, Address};

/// Name for the chain.
pub const NAME: &str = "Arbitrum Sepolia";
/// Chain ID for Arbitrum Sepolia.
pub const CHAIN_ID: u64 = 421614;
/// Circle USDC on Arbitrum Sepolia.
pub const USDC: Address = address!("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d");
/// Default public RPC endpoint.
pub const RPC_URL: &str = "https://sepolia-rollup.arbitrum.io/rpc";

/// Arbitrum Sepolia constants.
pub const ARBITRUM_SEPOLIA: ChainConstants =
    ChainConstants::new(NAME, CHAIN_ID, USDC, ENTRY_POINT_V08, SIMPLE_7702_DELEGATE, RPC_URL);
