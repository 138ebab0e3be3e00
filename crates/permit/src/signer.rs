use crate::{PermitError, ReadableToken, SignatureVerifier, TypedDataAccount};
use alloy::primitives::{Address, Bytes, U256};
use gasless_types::{Erc6492Signature, PermitData, TokenMetadata};
use tracing::{debug, instrument, warn};

/// Sign an EIP-2612 permit allowing `spender` to move `amount` of `token`
/// out of `account`.
///
/// The token's `name`, `version` and the owner's current nonce are read
/// from chain, the permit is signed with an unbounded deadline, and the
/// signature is checked by `verifier` before it is returned. A signature
/// that does not verify is never returned. The result is the canonical
/// signature, with any ERC-6492 wrapping removed.
#[instrument(skip_all, fields(token = %token.address(), owner = %account.address(), %spender))]
pub async fn sign_permit<T, V, A>(
    token: &T,
    verifier: &V,
    account: &A,
    spender: Address,
    amount: U256,
) -> Result<Bytes, PermitError>
where
    T: ReadableToken + Sync,
    V: SignatureVerifier + Sync,
    A: TypedDataAccount + Sync,
{
    if amount.is_zero() {
        return Err(PermitError::ZeroAmount);
    }

    let owner = account.address();
    let name = token.name().await.map_err(PermitError::contract)?;
    let version = token.version().await.map_err(PermitError::contract)?;
    let nonce = token.nonces(owner).await.map_err(PermitError::contract)?;
    debug!(%name, %version, %nonce, "read token permit state");

    let permit = PermitData::new(
        &TokenMetadata::new(name, version),
        token.chain_id(),
        token.address(),
        owner,
        spender,
        amount,
        nonce,
    );

    let signature = account
        .sign_typed_data(permit.message(), permit.domain())
        .await
        .map_err(PermitError::signer)?;

    let valid = verifier
        .verify_typed_data(owner, permit.signing_hash(), &signature)
        .await
        .map_err(PermitError::transport)?;
    if !valid {
        warn!(%signature, "permit signature failed verification");
        return Err(PermitError::InvalidSignature { account: owner, signature });
    }

    Ok(Erc6492Signature::parse(&signature)?.into_signature())
}
