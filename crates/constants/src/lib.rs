//! Gasless system constants.
//!
//! This crate contains the per-chain constants needed to send USDC-paid
//! user operations from an EIP-7702 smart account: the chain id, the USDC
//! token, the ERC-4337 EntryPoint, the `Simple7702Account` delegate and the
//! default RPC and bundler endpoints.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::arbitrum_sepolia;
pub use chains::sepolia;
#[cfg(any(test, feature = "test-utils"))]
pub use chains::test_utils;

mod types;
pub use types::{ChainConstants, KnownChains, ParseChainError};

use alloy::primitives::{address, Address};

/// The ERC-4337 v0.8 EntryPoint. Deployed at the same address on every
/// supported chain.
pub const ENTRY_POINT_V08: Address = address!("0x4337084D9E255Ff0702461CF8895CE9E3b5Ff108");

/// The `Simple7702Account` implementation used as the EIP-7702 delegate for
/// EntryPoint v0.8.
pub const SIMPLE_7702_DELEGATE: Address = address!("0xe6Cae83BdE06E4c305530e199D7217f42808555B");

/// The `factory` marker that tells the EntryPoint the sender is an EIP-7702
/// account and that the authorization travels alongside the user operation.
pub const EIP7702_FACTORY_MARKER: Address = address!("0x7702000000000000000000000000000000000000");

/// Number of decimals used by USDC.
pub const USDC_DECIMALS: u8 = 6;

/// Base URL of the public Pimlico bundler. The chain id and `/rpc` are
/// appended per chain.
pub const PIMLICO_PUBLIC_URL: &str = "https://public.pimlico.io/v2";

/// Circle's testnet faucet, where accounts can be funded with USDC.
pub const USDC_FAUCET_URL: &str = "https://faucet.circle.com";
