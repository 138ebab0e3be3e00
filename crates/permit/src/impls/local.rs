use crate::TypedDataAccount;
use alloy::{
    primitives::{Address, Bytes},
    signers::{local::PrivateKeySigner, Signer},
    sol_types::{Eip712Domain, SolStruct},
};

impl TypedDataAccount for PrivateKeySigner {
    type Error = alloy::signers::Error;

    fn address(&self) -> Address {
        Signer::address(self)
    }

    async fn sign_typed_data<T: SolStruct + Sync>(
        &self,
        payload: &T,
        domain: &Eip712Domain,
    ) -> Result<Bytes, Self::Error> {
        let hash = payload.eip712_signing_hash(domain);
        let signature = Signer::sign_hash(self, &hash).await?;
        Ok(Bytes::copy_from_slice(&signature.as_bytes()))
    }
}
