use crate::ReadableToken;
use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use gasless_types::IERC20Permit;

/// A [`ReadableToken`] backed by an alloy [`Provider`].
#[derive(Debug, Clone)]
pub struct TokenReader<P> {
    provider: P,
    address: Address,
    chain_id: u64,
}

impl<P> TokenReader<P> {
    /// Create a reader for the token at `address` on `chain_id`.
    pub const fn new(provider: P, address: Address, chain_id: u64) -> Self {
        Self { provider, address, chain_id }
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: Provider> TokenReader<P> {
    /// Read the token balance of `account`.
    pub async fn balance_of(&self, account: Address) -> Result<U256, alloy::contract::Error> {
        IERC20Permit::new(self.address, &self.provider).balanceOf(account).call().await
    }
}

impl<P> ReadableToken for TokenReader<P>
where
    P: Provider + Send + Sync,
{
    type Error = alloy::contract::Error;

    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn name(&self) -> Result<String, Self::Error> {
        IERC20Permit::new(self.address, &self.provider).name().call().await
    }

    async fn version(&self) -> Result<String, Self::Error> {
        IERC20Permit::new(self.address, &self.provider).version().call().await
    }

    async fn nonces(&self, owner: Address) -> Result<U256, Self::Error> {
        IERC20Permit::new(self.address, &self.provider).nonces(owner).call().await
    }
}
