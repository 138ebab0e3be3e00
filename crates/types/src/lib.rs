//! Types used to build gasless USDC user operations: contract bindings,
//! EIP-2612 permit typed data, ERC-6492 signature parsing, the ERC-4337
//! v0.8 user operation, and configuration.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{
    IERC1271, IERC20Permit, IEntryPoint, ISimple7702Account, ISwapRouter, IValidator6492,
    PackedUserOperation, Permit, ERC1271_MAGIC_VALUE,
};

mod config;
pub use config::{ConfigError, GaslessConfig};

/// Environment variable names a [`GaslessConfig`] is loaded from.
pub mod env {
    pub use crate::config::{
        BUNDLER_URL, CHAIN, MXNB_ADDRESS, OWNER_PRIVATE_KEY, PAYMASTER_ADDRESS, RECIPIENT_ADDRESS,
        RPC_URL, SIG_VALIDATOR_ADDRESS, SWAP_ROUTER_ADDRESS, USDC_ADDRESS,
    };
}

mod signing;
pub use signing::{
    permit_domain, Erc6492Error, Erc6492Signature, PermitData, TokenMetadata, ERC6492_MAGIC,
    PERMIT_DEADLINE,
};

mod user_op;
pub use user_op::{
    encode_permit_paymaster_data, entry_point_domain, Call, GasEstimate, GasFees, PaymasterFields,
    UserOperation, DEFAULT_PAYMASTER_POST_OP_GAS_LIMIT, DEFAULT_PAYMASTER_VERIFICATION_GAS_LIMIT,
    PERMIT_MODE,
};
