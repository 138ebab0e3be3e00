use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};
use serde::{Deserialize, Serialize};

/// Paymaster mode selecting permit-based payment.
pub const PERMIT_MODE: u8 = 0;

/// Default gas limit for paymaster validation. Covers the permit call and
/// the token transfer performed in `validatePaymasterUserOp`.
pub const DEFAULT_PAYMASTER_VERIFICATION_GAS_LIMIT: U256 = U256::from_limbs([2_000_000, 0, 0, 0]);

/// Default gas limit for the paymaster's `postOp` refund.
pub const DEFAULT_PAYMASTER_POST_OP_GAS_LIMIT: U256 = U256::from_limbs([150_000, 0, 0, 0]);

/// The paymaster portion of a user operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterFields {
    /// Paymaster contract.
    pub paymaster: Address,
    /// Data passed to the paymaster.
    pub paymaster_data: Bytes,
    /// Gas for paymaster validation.
    #[serde(rename = "paymasterVerificationGasLimit")]
    pub verification_gas_limit: U256,
    /// Gas for the paymaster's `postOp`.
    #[serde(rename = "paymasterPostOpGasLimit")]
    pub post_op_gas_limit: U256,
}

impl PaymasterFields {
    /// Create new paymaster fields.
    pub const fn new(
        paymaster: Address,
        paymaster_data: Bytes,
        verification_gas_limit: U256,
        post_op_gas_limit: U256,
    ) -> Self {
        Self { paymaster, paymaster_data, verification_gas_limit, post_op_gas_limit }
    }

    /// Paymaster fields carrying a token permit, with the default gas
    /// limits.
    pub fn permit(paymaster: Address, token: Address, amount: U256, signature: &[u8]) -> Self {
        Self::new(
            paymaster,
            encode_permit_paymaster_data(token, amount, signature),
            DEFAULT_PAYMASTER_VERIFICATION_GAS_LIMIT,
            DEFAULT_PAYMASTER_POST_OP_GAS_LIMIT,
        )
    }

    /// Override the gas limits.
    pub fn with_gas_limits(self, verification: U256, post_op: U256) -> Self {
        Self { verification_gas_limit: verification, post_op_gas_limit: post_op, ..self }
    }
}

/// `encodePacked(uint8 mode, address token, uint256 amount, bytes signature)`.
pub fn encode_permit_paymaster_data(token: Address, amount: U256, signature: &[u8]) -> Bytes {
    let mut buf = Vec::with_capacity(1 + 20 + 32 + signature.len());
    buf.push(PERMIT_MODE);
    buf.extend_from_slice(&token.abi_encode_packed());
    buf.extend_from_slice(&amount.abi_encode_packed());
    buf.extend_from_slice(signature);
    buf.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permit_data_layout() {
        let token = Address::repeat_byte(0x89);
        let sig = [0x42u8; 65];
        let data = encode_permit_paymaster_data(token, U256::from(10_000_000), &sig);

        assert_eq!(data.len(), 1 + 20 + 32 + 65);
        assert_eq!(data[0], 0);
        assert_eq!(&data[1..21], token.as_slice());
        assert_eq!(&data[21..53], &U256::from(10_000_000).to_be_bytes::<32>());
        assert_eq!(&data[53..], &sig);
    }

    #[test]
    fn default_limits() {
        let fields = PaymasterFields::permit(Address::ZERO, Address::ZERO, U256::ZERO, &[]);
        assert_eq!(fields.verification_gas_limit, U256::from(2_000_000));
        assert_eq!(fields.post_op_gas_limit, U256::from(150_000));
    }
}
