use crate::AccountError;
use alloy::{
    eips::eip7702::{constants::EIP7702_DELEGATION_DESIGNATOR, Authorization, SignedAuthorization},
    primitives::{aliases::U192, bytes, Address, Bytes, U256},
    providers::Provider,
    signers::{local::PrivateKeySigner, Signer},
    sol_types::{Eip712Domain, SolCall, SolStruct},
};
use gasless_constants::ChainConstants;
use gasless_permit::TypedDataAccount;
use gasless_types::{Call, IEntryPoint, ISimple7702Account, UserOperation};
use tracing::{debug, instrument};

/// A well-formed but invalid signature, used when estimating gas before the
/// operation is signed. Validation runs to completion on it, so the
/// estimate covers a full `ecrecover`.
pub const DUMMY_SIGNATURE: Bytes = bytes!(
    "0xfffffffffffffffffffffffffffffff0000000000000000000000000000000007aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1c"
);

/// The code an EOA carries once delegated to `delegate`: `0xef0100 ++ delegate`.
pub fn delegation_code(delegate: Address) -> Bytes {
    [&EIP7702_DELEGATION_DESIGNATOR[..], delegate.as_slice()].concat().into()
}

/// An owner key acting as a `Simple7702Account`.
///
/// The account address is the owner's address. Operations are validated by
/// the delegate with `ecrecover` against that address, so the owner signs
/// both user operations and typed data directly.
#[derive(Debug, Clone)]
pub struct Simple7702Account<S = PrivateKeySigner> {
    signer: S,
    constants: ChainConstants,
}

impl<S> Simple7702Account<S> {
    /// Create an account for `signer` on the chain described by `constants`.
    pub const fn new(signer: S, constants: ChainConstants) -> Self {
        Self { signer, constants }
    }

    /// Get a reference to the owner signer.
    pub const fn signer(&self) -> &S {
        &self.signer
    }

    /// Get the chain constants.
    pub const fn constants(&self) -> &ChainConstants {
        &self.constants
    }

    /// Get the delegate implementation.
    pub const fn delegate(&self) -> Address {
        self.constants.delegate()
    }

    /// Get the EntryPoint the account operates through.
    pub const fn entry_point(&self) -> Address {
        self.constants.entry_point()
    }

    /// The placeholder signature for gas estimation.
    pub const fn dummy_signature(&self) -> Bytes {
        DUMMY_SIGNATURE
    }

    /// Encode `calls` as account calldata: `execute` for a single call,
    /// `executeBatch` for several.
    pub fn encode_calls(calls: &[Call]) -> Result<Bytes, AccountError> {
        let data = match calls {
            [] => return Err(AccountError::NoCalls),
            [call] => ISimple7702Account::executeCall {
                target: call.to,
                value: call.value,
                data: call.data.clone(),
            }
            .abi_encode(),
            calls => ISimple7702Account::executeBatchCall {
                calls: calls.iter().cloned().map(Into::into).collect(),
            }
            .abi_encode(),
        };
        Ok(data.into())
    }
}

impl<S> Simple7702Account<S>
where
    S: Signer + Send + Sync,
{
    /// Get the account address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign an EIP-7702 authorization delegating the account to the
    /// `Simple7702Account` implementation. `nonce` is the EOA's current
    /// transaction count.
    pub async fn sign_authorization(
        &self,
        nonce: u64,
    ) -> Result<SignedAuthorization, AccountError> {
        let authorization = Authorization {
            chain_id: U256::from(self.constants.chain_id()),
            address: self.delegate(),
            nonce,
        };
        let signature = self.signer.sign_hash(&authorization.signature_hash()).await?;
        Ok(authorization.into_signed(signature))
    }

    /// Sign a user operation: the raw signature over its v0.8 hash.
    pub async fn sign_user_operation(&self, op: &UserOperation) -> Result<Bytes, AccountError> {
        let hash = op.hash(self.entry_point(), self.constants.chain_id());
        let signature = self.signer.sign_hash(&hash).await?;
        Ok(Bytes::copy_from_slice(&signature.as_bytes()))
    }

    /// True if the account's code already delegates to the implementation.
    #[instrument(skip_all, fields(account = %self.address()))]
    pub async fn is_delegated<P: Provider>(&self, provider: &P) -> Result<bool, AccountError> {
        let code = provider.get_code_at(self.address()).await?;
        let delegated = code == delegation_code(self.delegate());
        debug!(delegated, code_len = code.len(), "checked delegation");
        Ok(delegated)
    }

    /// The account's EntryPoint nonce, on key zero.
    pub async fn entry_point_nonce<P: Provider>(&self, provider: &P) -> Result<U256, AccountError> {
        IEntryPoint::new(self.entry_point(), provider)
            .getNonce(self.address(), U192::ZERO)
            .call()
            .await
            .map_err(Into::into)
    }

    /// The EOA transaction count, used as the authorization nonce.
    pub async fn authorization_nonce<P: Provider>(
        &self,
        provider: &P,
    ) -> Result<u64, AccountError> {
        provider.get_transaction_count(self.address()).await.map_err(Into::into)
    }
}

impl<S> TypedDataAccount for Simple7702Account<S>
where
    S: Signer + Send + Sync,
{
    type Error = alloy::signers::Error;

    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn sign_typed_data<T: SolStruct + Sync>(
        &self,
        payload: &T,
        domain: &Eip712Domain,
    ) -> Result<Bytes, Self::Error> {
        let signature = self.signer.sign_hash(&payload.eip712_signing_hash(domain)).await?;
        Ok(Bytes::copy_from_slice(&signature.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::Signature, signers::local::PrivateKeySigner, sol_types::SolCall};

    fn account() -> Simple7702Account {
        Simple7702Account::new(
            PrivateKeySigner::from_slice(&[7u8; 32]).unwrap(),
            ChainConstants::sepolia(),
        )
    }

    fn call(byte: u8) -> Call {
        Call::new(Address::repeat_byte(byte), U256::from(byte), Bytes::from(vec![byte; 4]))
    }

    #[test]
    fn single_call_uses_execute() {
        let data = Simple7702Account::<PrivateKeySigner>::encode_calls(&[call(1)]).unwrap();
        let decoded = ISimple7702Account::executeCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.target, Address::repeat_byte(1));
        assert_eq!(decoded.value, U256::from(1));
        assert_eq!(decoded.data, Bytes::from(vec![1u8; 4]));
    }

    #[test]
    fn several_calls_use_execute_batch() {
        let data =
            Simple7702Account::<PrivateKeySigner>::encode_calls(&[call(1), call(2)]).unwrap();
        let decoded = ISimple7702Account::executeBatchCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.calls.len(), 2);
        assert_eq!(decoded.calls[1].target, Address::repeat_byte(2));
    }

    #[test]
    fn no_calls_is_an_error() {
        let err = Simple7702Account::<PrivateKeySigner>::encode_calls(&[]).unwrap_err();
        assert!(matches!(err, AccountError::NoCalls));
    }

    #[test]
    fn dummy_signature_is_65_bytes() {
        assert_eq!(account().dummy_signature().len(), 65);
        assert_eq!(DUMMY_SIGNATURE[31], 0x00);
        assert_eq!(DUMMY_SIGNATURE[32], 0x7a);
        assert_eq!(DUMMY_SIGNATURE[64], 0x1c);
        assert!(Signature::from_raw(&DUMMY_SIGNATURE).is_ok());
    }

    #[tokio::test]
    async fn authorization_targets_delegate() {
        let account = account();
        let signed = account.sign_authorization(4).await.unwrap();
        assert_eq!(signed.address, account.delegate());
        assert_eq!(signed.nonce, 4);
        assert_eq!(signed.chain_id, U256::from(11155111));
        assert_eq!(signed.recover_authority().unwrap(), account.address());
    }

    #[tokio::test]
    async fn user_operation_signature_recovers_to_account() {
        let account = account();
        let op = UserOperation::new(account.address(), U256::from(1), Bytes::new());
        let signature = account.sign_user_operation(&op).await.unwrap();

        let hash = op.hash(account.entry_point(), 11155111);
        let recovered =
            Signature::from_raw(&signature).unwrap().recover_address_from_prehash(&hash).unwrap();
        assert_eq!(recovered, account.address());
    }

    #[test]
    fn delegation_designator() {
        let code = delegation_code(Address::repeat_byte(0xe6));
        assert_eq!(code.len(), 23);
        assert_eq!(&code[..3], &[0xef, 0x01, 0x00]);
    }
}
