use alloy::transports::TransportError;

/// Errors returned by [`Simple7702Account`].
///
/// [`Simple7702Account`]: crate::Simple7702Account
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AccountError {
    /// A user operation must execute at least one call.
    #[error("no calls to execute")]
    NoCalls,
    /// The owner key failed to sign.
    #[error("signer error: {0}")]
    Signer(#[from] alloy::signers::Error),
    /// The node could not be queried.
    #[error("rpc error: {0}")]
    Rpc(#[from] TransportError),
    /// A contract read failed.
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
}
