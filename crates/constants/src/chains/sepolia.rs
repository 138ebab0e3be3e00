//! Constants for the Ethereum Sepolia testnet.

use crate::{ChainConstants, ENTRY_POINT_V08, SIMPLE_7702_DELEGATE};
use alloy::primitives::{address, Address};

/// Name for the chain.
pub const NAME: &str = "Sepolia";
/// Chain ID for Sepolia.
pub const CHAIN_ID: u64 = 11155111;
/// Circle USDC on Sepolia.
pub const USDC: Address = address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");
/// Default public RPC endpoint.
pub const RPC_URL: &str = "https://sepolia.drpc.org";

/// Sepolia constants.
pub const SEPOLIA: ChainConstants =
    ChainConstants::new(NAME, CHAIN_ID, USDC, ENTRY_POINT_V08, SIMPLE_7702_DELEGATE, RPC_URL);
