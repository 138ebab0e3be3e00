use alloy::{
    primitives::{Address, Bytes},
    transports::TransportError,
};
use gasless_types::Erc6492Error;

type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// Errors returned by [`sign_permit`].
///
/// [`sign_permit`]: crate::sign_permit
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PermitError {
    /// The signature did not verify against the account and permit.
    #[error("invalid permit signature for account {account}: {signature}")]
    InvalidSignature {
        /// The account that produced the signature.
        account: Address,
        /// The rejected signature.
        signature: Bytes,
    },
    /// Permits for a zero amount are never signed.
    #[error("permit amount must be greater than zero")]
    ZeroAmount,
    /// Reading the token's permit state failed.
    #[error("token read error: {0}")]
    Contract(#[source] BoxError),
    /// The verifier could not reach a verdict.
    #[error("signature verification error: {0}")]
    Transport(#[source] BoxError),
    /// The account failed to sign.
    #[error("signer error: {0}")]
    Signer(#[source] BoxError),
    /// The signature could not be unwrapped.
    #[error(transparent)]
    Unwrap(#[from] Erc6492Error),
}

impl PermitError {
    pub(crate) fn contract(error: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::Contract(Box::new(error))
    }

    pub(crate) fn transport(error: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(error))
    }

    pub(crate) fn signer(error: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::Signer(Box::new(error))
    }
}

/// Errors returned by [`PermitPaymaster`].
///
/// [`PermitPaymaster`]: crate::PermitPaymaster
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PaymasterError {
    /// No code is deployed at the paymaster address.
    #[error("paymaster not deployed at {0}")]
    NotDeployed(Address),
    /// Signing the permit failed.
    #[error(transparent)]
    Permit(#[from] PermitError),
    /// The node could not be queried.
    #[error("rpc error: {0}")]
    Rpc(#[from] TransportError),
}
