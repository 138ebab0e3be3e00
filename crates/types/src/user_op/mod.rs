mod call;
pub use call::Call;

mod paymaster;
pub use paymaster::{
    encode_permit_paymaster_data, PaymasterFields, DEFAULT_PAYMASTER_POST_OP_GAS_LIMIT,
    DEFAULT_PAYMASTER_VERIFICATION_GAS_LIMIT, PERMIT_MODE,
};

use crate::bindings::PackedUserOperation;
use alloy::{
    eips::eip7702::SignedAuthorization,
    primitives::{Address, Bytes, B256, U256},
    sol_types::{Eip712Domain, SolStruct},
};
use gasless_constants::EIP7702_FACTORY_MARKER;
use serde::{Deserialize, Serialize};

/// EIP-712 domain name of the v0.8 EntryPoint.
const ENTRY_POINT_DOMAIN_NAME: &str = "ERC4337";
/// EIP-712 domain version of the v0.8 EntryPoint.
const ENTRY_POINT_DOMAIN_VERSION: &str = "1";

/// Gas limits returned by `eth_estimateUserOperationGas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    /// Gas charged up front to cover bundler overhead.
    pub pre_verification_gas: U256,
    /// Gas for account validation.
    pub verification_gas_limit: U256,
    /// Gas for the account's execution call.
    pub call_gas_limit: U256,
    /// Gas for paymaster validation, if a paymaster was included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_verification_gas_limit: Option<U256>,
    /// Gas for the paymaster's `postOp`, if a paymaster was included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_post_op_gas_limit: Option<U256>,
}

/// EIP-1559 fees for a user operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasFees {
    /// Maximum total fee per gas.
    pub max_fee_per_gas: U256,
    /// Maximum priority fee per gas.
    pub max_priority_fee_per_gas: U256,
}

/// An ERC-4337 v0.8 user operation, in the unpacked form used by bundler
/// JSON-RPC.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperation {
    /// The account sending the operation.
    pub sender: Address,
    /// EntryPoint nonce of the sender.
    pub nonce: U256,
    /// Account factory, or [`EIP7702_FACTORY_MARKER`] for a 7702 account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<Address>,
    /// Calldata for the factory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_data: Option<Bytes>,
    /// Calldata executed by the account.
    pub call_data: Bytes,
    /// Gas for the account's execution call.
    pub call_gas_limit: U256,
    /// Gas for account validation.
    pub verification_gas_limit: U256,
    /// Gas charged up front to cover bundler overhead.
    pub pre_verification_gas: U256,
    /// Maximum total fee per gas.
    pub max_fee_per_gas: U256,
    /// Maximum priority fee per gas.
    pub max_priority_fee_per_gas: U256,
    /// Paymaster sponsoring the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster: Option<Address>,
    /// Gas for paymaster validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_verification_gas_limit: Option<U256>,
    /// Gas for the paymaster's `postOp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_post_op_gas_limit: Option<U256>,
    /// Data passed to the paymaster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_data: Option<Bytes>,
    /// Account signature over the operation hash.
    pub signature: Bytes,
    /// EIP-7702 authorization delegating the sender.
    #[serde(default, rename = "eip7702Auth", skip_serializing_if = "Option::is_none")]
    pub eip7702_auth: Option<SignedAuthorization>,
}

impl UserOperation {
    /// Create an unsigned operation executing `call_data` from `sender`.
    pub fn new(sender: Address, nonce: U256, call_data: Bytes) -> Self {
        Self { sender, nonce, call_data, ..Default::default() }
    }

    /// Attach an EIP-7702 authorization and mark the sender as a 7702
    /// account.
    pub fn with_authorization(self, auth: SignedAuthorization) -> Self {
        Self {
            factory: Some(EIP7702_FACTORY_MARKER),
            factory_data: Some(Bytes::new()),
            eip7702_auth: Some(auth),
            ..self
        }
    }

    /// Set the fees.
    pub fn with_fees(self, fees: GasFees) -> Self {
        Self {
            max_fee_per_gas: fees.max_fee_per_gas,
            max_priority_fee_per_gas: fees.max_priority_fee_per_gas,
            ..self
        }
    }

    /// Set the paymaster fields.
    pub fn with_paymaster(self, fields: PaymasterFields) -> Self {
        Self {
            paymaster: Some(fields.paymaster),
            paymaster_verification_gas_limit: Some(fields.verification_gas_limit),
            paymaster_post_op_gas_limit: Some(fields.post_op_gas_limit),
            paymaster_data: Some(fields.paymaster_data),
            ..self
        }
    }

    /// Apply a gas estimate. Paymaster limits already set on the operation
    /// are kept; the estimate only fills those that are missing.
    pub fn with_gas(self, estimate: GasEstimate) -> Self {
        Self {
            pre_verification_gas: estimate.pre_verification_gas,
            verification_gas_limit: estimate.verification_gas_limit,
            call_gas_limit: estimate.call_gas_limit,
            paymaster_verification_gas_limit: self
                .paymaster_verification_gas_limit
                .or(estimate.paymaster_verification_gas_limit),
            paymaster_post_op_gas_limit: self
                .paymaster_post_op_gas_limit
                .or(estimate.paymaster_post_op_gas_limit),
            ..self
        }
    }

    /// Set the signature.
    pub fn with_signature(self, signature: Bytes) -> Self {
        Self { signature, ..self }
    }

    /// True if the operation carries an EIP-7702 authorization.
    pub const fn is_eip7702(&self) -> bool {
        self.eip7702_auth.is_some()
    }

    /// `factory ++ factoryData`, or empty when there is no factory.
    pub fn init_code(&self) -> Bytes {
        match self.factory {
            Some(factory) => {
                let data = self.factory_data.as_ref().map_or(&[][..], |d| &d[..]);
                [factory.as_slice(), data].concat().into()
            }
            None => Bytes::new(),
        }
    }

    /// The init code as hashed by the EntryPoint. For a 7702 sender the
    /// marker is replaced by the delegate address from the authorization.
    fn hashed_init_code(&self) -> Bytes {
        match (&self.factory, &self.eip7702_auth) {
            (Some(factory), Some(auth)) if *factory == EIP7702_FACTORY_MARKER => {
                let data = self.factory_data.as_ref().map_or(&[][..], |d| &d[..]);
                [auth.address.as_slice(), data].concat().into()
            }
            _ => self.init_code(),
        }
    }

    /// `paymaster ++ verificationGas(16) ++ postOpGas(16) ++ paymasterData`,
    /// or empty when there is no paymaster.
    pub fn paymaster_and_data(&self) -> Bytes {
        let Some(paymaster) = self.paymaster else {
            return Bytes::new();
        };

        let mut buf = Vec::with_capacity(52 + self.paymaster_data.as_ref().map_or(0, |d| d.len()));
        buf.extend_from_slice(paymaster.as_slice());
        let verification_gas = self.paymaster_verification_gas_limit.unwrap_or_default();
        let post_op_gas = self.paymaster_post_op_gas_limit.unwrap_or_default();
        buf.extend_from_slice(&u128_bytes(verification_gas));
        buf.extend_from_slice(&u128_bytes(post_op_gas));
        buf.extend_from_slice(self.paymaster_data.as_ref().map_or(&[][..], |d| &d[..]));
        buf.into()
    }

    /// `verificationGasLimit(16) ++ callGasLimit(16)`.
    pub fn account_gas_limits(&self) -> B256 {
        pack_u128_pair(self.verification_gas_limit, self.call_gas_limit)
    }

    /// `maxPriorityFeePerGas(16) ++ maxFeePerGas(16)`.
    pub fn gas_fees(&self) -> B256 {
        pack_u128_pair(self.max_priority_fee_per_gas, self.max_fee_per_gas)
    }

    /// Pack the operation into the on-chain representation.
    pub fn pack(&self) -> PackedUserOperation {
        self.pack_with_init_code(self.init_code())
    }

    fn pack_with_init_code(&self, init_code: Bytes) -> PackedUserOperation {
        PackedUserOperation {
            sender: self.sender,
            nonce: self.nonce,
            initCode: init_code,
            callData: self.call_data.clone(),
            accountGasLimits: self.account_gas_limits(),
            preVerificationGas: self.pre_verification_gas,
            gasFees: self.gas_fees(),
            paymasterAndData: self.paymaster_and_data(),
        }
    }

    /// The v0.8 user operation hash: the EIP-712 signing hash of the packed
    /// operation under the EntryPoint's domain.
    pub fn hash(&self, entry_point: Address, chain_id: u64) -> B256 {
        self.pack_with_init_code(self.hashed_init_code())
            .eip712_signing_hash(&entry_point_domain(entry_point, chain_id))
    }
}

/// The EIP-712 domain of a v0.8 EntryPoint.
pub fn entry_point_domain(entry_point: Address, chain_id: u64) -> Eip712Domain {
    Eip712Domain {
        name: Some(ENTRY_POINT_DOMAIN_NAME.into()),
        version: Some(ENTRY_POINT_DOMAIN_VERSION.into()),
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(entry_point),
        salt: None,
    }
}

/// The low 16 bytes of `value`, saturating at `u128::MAX`.
fn u128_bytes(value: U256) -> [u8; 16] {
    value.saturating_to::<u128>().to_be_bytes()
}

fn pack_u128_pair(high: U256, low: U256) -> B256 {
    let mut buf = [0u8; 32];
    buf[..16].copy_from_slice(&u128_bytes(high));
    buf[16..].copy_from_slice(&u128_bytes(low));
    B256::from(buf)
}
