//! Accounts producing ERC-6492 wrapped signatures.
use alloy::{
    primitives::{Address, Bytes},
    signers::local::PrivateKeySigner,
    sol_types::{Eip712Domain, SolStruct},
};
use gasless_constants::test_utils::TEST_DELEGATE;
use gasless_permit::TypedDataAccount;
use gasless_types::Erc6492Signature;

/// Wraps every signature of the inner signer in ERC-6492 deployment data,
/// as a counterfactual smart account would.
#[derive(Debug, Clone)]
pub struct WrappingAccount {
    signer: PrivateKeySigner,
    factory: Address,
    factory_data: Bytes,
}

impl WrappingAccount {
    /// Wrap `signer`, using [`TEST_DELEGATE`] as the factory.
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer, factory: TEST_DELEGATE, factory_data: Bytes::from_static(&[0xde, 0xad]) }
    }

    /// Get the factory written into wrapped signatures.
    pub const fn factory(&self) -> Address {
        self.factory
    }
}

impl TypedDataAccount for WrappingAccount {
    type Error = alloy::signers::Error;

    fn address(&self) -> Address {
        TypedDataAccount::address(&self.signer)
    }

    async fn sign_typed_data<T: SolStruct + Sync>(
        &self,
        payload: &T,
        domain: &Eip712Domain,
    ) -> Result<Bytes, Self::Error> {
        let inner = TypedDataAccount::sign_typed_data(&self.signer, payload, domain).await?;
        Ok(Erc6492Signature::wrap(self.factory, self.factory_data.clone(), inner))
    }
}
