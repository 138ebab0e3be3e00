use alloy::{
    primitives::{Address, Bytes, B256, U256},
    sol_types::{Eip712Domain, SolStruct},
};
use core::future::Future;

/// Read access to the EIP-2612 surface of a token.
///
/// Implementors are bound to a single token contract on a single chain.
pub trait ReadableToken {
    /// The error type returned by reads.
    type Error: core::error::Error + Send + Sync + 'static;

    /// The token contract address.
    fn address(&self) -> Address;

    /// The chain the token lives on.
    fn chain_id(&self) -> u64;

    /// The token's EIP-712 domain name.
    fn name(&self) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// The token's EIP-712 domain version.
    fn version(&self) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// The current permit nonce of `owner`.
    fn nonces(&self, owner: Address) -> impl Future<Output = Result<U256, Self::Error>> + Send;
}

/// An account that can produce EIP-712 signatures.
///
/// The returned bytes may be in any format the account's
/// [`SignatureVerifier`] accepts, including ERC-6492 wrapped signatures.
pub trait TypedDataAccount {
    /// The error type returned by signing.
    type Error: core::error::Error + Send + Sync + 'static;

    /// The address that signatures are attributed to.
    fn address(&self) -> Address;

    /// Sign `payload` under `domain`.
    fn sign_typed_data<T: SolStruct + Sync>(
        &self,
        payload: &T,
        domain: &Eip712Domain,
    ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send;
}

/// Checks signatures over an EIP-712 digest.
pub trait SignatureVerifier {
    /// The error type returned when verification could not be carried out.
    /// A signature that is simply wrong is `Ok(false)`, not an error.
    type Error: core::error::Error + Send + Sync + 'static;

    /// True if `signature` is a valid signature by `signer` over `digest`.
    fn verify_typed_data(
        &self,
        signer: Address,
        digest: B256,
        signature: &[u8],
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
