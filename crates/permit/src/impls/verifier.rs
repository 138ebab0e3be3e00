use crate::SignatureVerifier;
use alloy::{
    primitives::{Address, Bytes, Signature, B256},
    providers::Provider,
};
use core::convert::Infallible;
use gasless_types::{Erc6492Signature, IERC1271, IValidator6492, ERC1271_MAGIC_VALUE};
use tracing::debug;

/// Verifies ECDSA signatures locally by recovering the signer.
///
/// ERC-6492 wrapped signatures are unwrapped first. This is sufficient for
/// EOAs and for EIP-7702 accounts whose validation is `ecrecover` against
/// their own address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EcdsaVerifier;

impl EcdsaVerifier {
    /// Recover the signer of `digest`, or `None` if the signature is
    /// malformed.
    pub fn recover(digest: B256, signature: &[u8]) -> Option<Address> {
        let inner = Erc6492Signature::parse(signature).ok()?.into_signature();
        Signature::from_raw(&inner).ok()?.recover_address_from_prehash(&digest).ok()
    }
}

impl SignatureVerifier for EcdsaVerifier {
    type Error = Infallible;

    async fn verify_typed_data(
        &self,
        signer: Address,
        digest: B256,
        signature: &[u8],
    ) -> Result<bool, Self::Error> {
        Ok(Self::recover(digest, signature) == Some(signer))
    }
}

/// Verifies signatures locally, falling back to the signer's code.
///
/// A deployed (or delegated) signer is checked with ERC-1271 against the
/// unwrapped signature. A signer with no code can only be checked through an
/// ERC-6492 validator, and only when one is configured with
/// [`ProviderVerifier::with_validator`].
#[derive(Debug, Clone)]
pub struct ProviderVerifier<P> {
    provider: P,
    validator: Option<Address>,
}

impl<P> ProviderVerifier<P> {
    /// Create a verifier querying `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider, validator: None }
    }

    /// Check wrapped signatures of undeployed signers with the ERC-6492
    /// validator at `validator`.
    pub fn with_validator(self, validator: Address) -> Self {
        Self { validator: Some(validator), ..self }
    }

    /// Get the ERC-6492 validator, if any.
    pub const fn validator(&self) -> Option<Address> {
        self.validator
    }
}

/// Reverts and undecodable returns mean "not valid". Only a failure to reach
/// the node is an error.
fn rejection_is_false(
    result: Result<bool, alloy::contract::Error>,
) -> Result<bool, alloy::contract::Error> {
    match result {
        Ok(valid) => Ok(valid),
        Err(alloy::contract::Error::TransportError(e)) if e.as_error_resp().is_none() => {
            Err(e.into())
        }
        Err(e) => {
            debug!(%e, "contract rejected signature");
            Ok(false)
        }
    }
}

impl<P> SignatureVerifier for ProviderVerifier<P>
where
    P: Provider + Send + Sync,
{
    type Error = alloy::contract::Error;

    async fn verify_typed_data(
        &self,
        signer: Address,
        digest: B256,
        signature: &[u8],
    ) -> Result<bool, Self::Error> {
        if EcdsaVerifier::recover(digest, signature) == Some(signer) {
            return Ok(true);
        }

        let parsed = match Erc6492Signature::parse(signature) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(%e, "malformed ERC-6492 signature");
                return Ok(false);
            }
        };

        let code = self.provider.get_code_at(signer).await?;
        if !code.is_empty() {
            debug!(%signer, "ecrecover mismatch, checking ERC-1271");
            let result = IERC1271::new(signer, &self.provider)
                .isValidSignature(digest, parsed.signature)
                .call()
                .await
                .map(|magic| magic == ERC1271_MAGIC_VALUE);
            return rejection_is_false(result);
        }

        match (parsed.factory, self.validator) {
            (Some(factory), Some(validator)) => {
                debug!(%signer, %factory, %validator, "undeployed signer, checking ERC-6492");
                let result = IValidator6492::new(validator, &self.provider)
                    .isValidSig(signer, digest, Bytes::copy_from_slice(signature))
                    .call()
                    .await;
                rejection_is_false(result)
            }
            _ => {
                debug!(%signer, "signer has no code");
                Ok(false)
            }
        }
    }
}
