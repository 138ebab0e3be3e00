use alloy::{primitives::B256, transports::TransportError};
use core::time::Duration;
use gasless_account::AccountError;
use gasless_permit::PaymasterError;

/// Errors returned by the [`BundlerClient`].
///
/// [`BundlerClient`]: crate::BundlerClient
#[derive(Debug, thiserror::Error)]
pub enum BundlerError {
    /// The bundler returned an error or could not be reached.
    #[error("bundler rpc error: {0}")]
    Rpc(#[from] TransportError),
    /// No receipt appeared before the polling timeout.
    #[error("no receipt for user operation {hash} after {timeout:?}")]
    ReceiptTimeout {
        /// The user operation hash.
        hash: B256,
        /// How long polling ran.
        timeout: Duration,
    },
    /// An error occurred while parsing the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Errors returned by [`UserOpSender`].
///
/// [`UserOpSender`]: crate::UserOpSender
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SenderError {
    /// Account encoding, signing or chain reads failed.
    #[error(transparent)]
    Account(#[from] AccountError),
    /// The paymaster permit could not be produced.
    #[error(transparent)]
    Paymaster(#[from] PaymasterError),
    /// The bundler rejected or failed a request.
    #[error(transparent)]
    Bundler(#[from] BundlerError),
}
