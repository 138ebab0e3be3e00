//! Gasless Permit Library
//!
//! Signs and verifies the EIP-2612 permits that let a paymaster pull the gas
//! fee for a user operation out of the sender's token balance.

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

mod error;
pub use error::{PaymasterError, PermitError};

mod impls;
pub use impls::{EcdsaVerifier, ProviderVerifier, TokenReader};

mod paymaster;
pub use paymaster::{PermitPaymaster, DEFAULT_PERMIT_AMOUNT};

mod signer;
pub use signer::sign_permit;

mod traits;
pub use traits::{ReadableToken, SignatureVerifier, TypedDataAccount};
