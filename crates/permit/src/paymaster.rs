use crate::{sign_permit, PaymasterError, ReadableToken, SignatureVerifier, TypedDataAccount};
use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use gasless_types::{
    PaymasterFields, DEFAULT_PAYMASTER_POST_OP_GAS_LIMIT, DEFAULT_PAYMASTER_VERIFICATION_GAS_LIMIT,
};
use tracing::{debug, instrument};

/// Default permit amount: 10 USDC (6 decimals). Caps what the paymaster can
/// pull for a single operation.
pub const DEFAULT_PERMIT_AMOUNT: U256 = U256::from_limbs([10_000_000, 0, 0, 0]);

/// A paymaster that is paid through an EIP-2612 permit on the fee token.
///
/// The paymaster is the permit's spender. It redeems the permit during
/// validation, takes the fee, and refunds the unused part in `postOp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitPaymaster {
    address: Address,
    amount: U256,
    verification_gas_limit: U256,
    post_op_gas_limit: U256,
}

impl PermitPaymaster {
    /// Create a paymaster with the default permit amount and gas limits.
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            amount: DEFAULT_PERMIT_AMOUNT,
            verification_gas_limit: DEFAULT_PAYMASTER_VERIFICATION_GAS_LIMIT,
            post_op_gas_limit: DEFAULT_PAYMASTER_POST_OP_GAS_LIMIT,
        }
    }

    /// Set the permit amount.
    pub fn with_amount(self, amount: U256) -> Self {
        Self { amount, ..self }
    }

    /// Set the paymaster gas limits.
    pub fn with_gas_limits(self, verification: U256, post_op: U256) -> Self {
        Self { verification_gas_limit: verification, post_op_gas_limit: post_op, ..self }
    }

    /// Get the paymaster address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the permit amount.
    pub const fn amount(&self) -> U256 {
        self.amount
    }

    /// Get the paymaster verification gas limit.
    pub const fn verification_gas_limit(&self) -> U256 {
        self.verification_gas_limit
    }

    /// Get the paymaster post-op gas limit.
    pub const fn post_op_gas_limit(&self) -> U256 {
        self.post_op_gas_limit
    }

    /// Fail unless code is deployed at the paymaster address.
    #[instrument(skip_all, fields(paymaster = %self.address))]
    pub async fn ensure_deployed<P: Provider>(&self, provider: &P) -> Result<(), PaymasterError> {
        let code = provider.get_code_at(self.address).await?;
        if code.is_empty() {
            return Err(PaymasterError::NotDeployed(self.address));
        }
        debug!(code_len = code.len(), "paymaster deployed");
        Ok(())
    }

    /// Sign a permit for this paymaster and build the paymaster fields of a
    /// user operation from it.
    pub async fn paymaster_fields<T, V, A>(
        &self,
        token: &T,
        verifier: &V,
        account: &A,
    ) -> Result<PaymasterFields, PaymasterError>
    where
        T: ReadableToken + Sync,
        V: SignatureVerifier + Sync,
        A: TypedDataAccount + Sync,
    {
        let signature = sign_permit(token, verifier, account, self.address, self.amount).await?;
        Ok(PaymasterFields::permit(self.address, token.address(), self.amount, &signature)
            .with_gas_limits(self.verification_gas_limit, self.post_op_gas_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::Bytes, providers::ProviderBuilder, transports::mock::Asserter};

    fn provider(asserter: &Asserter) -> impl Provider {
        ProviderBuilder::new().disable_recommended_fillers().connect_mocked_client(asserter.clone())
    }

    #[tokio::test]
    async fn empty_code_is_not_deployed() {
        let asserter = Asserter::new();
        let paymaster = PermitPaymaster::new(Address::repeat_byte(0x8c));

        asserter.push_success(&Bytes::new());
        let err = paymaster.ensure_deployed(&provider(&asserter)).await.unwrap_err();
        assert!(matches!(err, PaymasterError::NotDeployed(a) if a == paymaster.address()));
    }

    #[tokio::test]
    async fn code_present_is_deployed() {
        let asserter = Asserter::new();
        let paymaster = PermitPaymaster::new(Address::repeat_byte(0x8c));

        asserter.push_success(&Bytes::from(vec![0x60, 0x80, 0x60, 0x40]));
        paymaster.ensure_deployed(&provider(&asserter)).await.unwrap();
    }

    #[test]
    fn defaults() {
        let paymaster = PermitPaymaster::new(Address::ZERO);
        assert_eq!(paymaster.amount(), U256::from(10_000_000));
        assert_eq!(paymaster.verification_gas_limit(), U256::from(2_000_000));
        assert_eq!(paymaster.post_op_gas_limit(), U256::from(150_000));

        let custom = paymaster.with_gas_limits(U256::from(1), U256::from(2));
        assert_eq!(custom.verification_gas_limit(), U256::from(1));
        assert_eq!(custom.post_op_gas_limit(), U256::from(2));
    }
}
