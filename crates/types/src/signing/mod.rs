mod erc6492;
pub use erc6492::{Erc6492Signature, ERC6492_MAGIC};

mod error;
pub use error::Erc6492Error;

use crate::bindings::Permit;
use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::{Eip712Domain, SolStruct};
use serde::{Deserialize, Serialize};

/// Deadline used for every permit.
///
/// The paymaster validates the permit inside `validatePaymasterUserOp`,
/// where ERC-4337 forbids reading `block.timestamp`. The permit therefore
/// never expires, and the token nonce alone makes it single-use.
pub const PERMIT_DEADLINE: U256 = U256::MAX;

/// The token's EIP-712 identity, as read from the token contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The token's `name()`.
    pub name: String,
    /// The token's `version()`.
    pub version: String,
}

impl TokenMetadata {
    /// Create new token metadata.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into() }
    }
}

/// Construct the EIP-712 domain of an EIP-2612 token.
///
/// This must match the token's own `DOMAIN_SEPARATOR`, otherwise the
/// resulting signature is rejected on-chain.
pub fn permit_domain(metadata: &TokenMetadata, chain_id: u64, token: Address) -> Eip712Domain {
    Eip712Domain {
        name: Some(metadata.name.clone().into()),
        version: Some(metadata.version.clone().into()),
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(token),
        salt: None,
    }
}

/// A fully populated EIP-2612 permit: domain plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitData {
    domain: Eip712Domain,
    message: Permit,
}

impl PermitData {
    /// Build the permit for `owner` allowing `spender` to move `value` of
    /// `token`, bound to the owner's current token `nonce`.
    pub fn new(
        metadata: &TokenMetadata,
        chain_id: u64,
        token: Address,
        owner: Address,
        spender: Address,
        value: U256,
        nonce: U256,
    ) -> Self {
        Self {
            domain: permit_domain(metadata, chain_id, token),
            message: Permit { owner, spender, value, nonce, deadline: PERMIT_DEADLINE },
        }
    }

    /// Get the EIP-712 domain.
    pub const fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Get the permit message.
    pub const fn message(&self) -> &Permit {
        &self.message
    }

    /// Get the token the permit applies to.
    pub fn token(&self) -> Option<Address> {
        self.domain.verifying_contract
    }

    /// Replace the nonce, keeping everything else.
    pub fn with_nonce(self, nonce: U256) -> Self {
        Self { message: Permit { nonce, ..self.message }, ..self }
    }

    /// The EIP-712 digest that the owner signs.
    pub fn signing_hash(&self) -> B256 {
        self.message.eip712_signing_hash(&self.domain)
    }

    /// Decompose into domain and message.
    pub fn into_parts(self) -> (Eip712Domain, Permit) {
        (self.domain, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256, keccak256};
    use alloy::sol_types::SolValue;

    const USDC: Address = address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");
    const OWNER: Address = Address::repeat_byte(0x11);
    const SPENDER: Address = Address::repeat_byte(0x22);

    fn usdc() -> TokenMetadata {
        TokenMetadata::new("USDC", "2")
    }

    #[test]
    fn deadline_is_max() {
        let permit =
            PermitData::new(&usdc(), 11155111, USDC, OWNER, SPENDER, U256::from(10), U256::ZERO);
        assert_eq!(permit.message().deadline, U256::MAX);
    }

    #[test]
    fn domain_is_deterministic() {
        let a = permit_domain(&usdc(), 11155111, USDC);
        let b = permit_domain(&usdc(), 11155111, USDC);
        assert_eq!(a, b);
        assert_eq!(a.separator(), b.separator());
        assert_eq!(a.hash_struct(), b.hash_struct());
    }

    #[test]
    fn domain_separator_matches_manual_encoding() {
        let domain = permit_domain(&usdc(), 1, USDC);

        let type_hash = keccak256(
            "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)",
        );
        let manual = keccak256(
            (
                type_hash,
                keccak256("USDC"),
                keccak256("2"),
                U256::from(1),
                USDC,
            )
                .abi_encode(),
        );
        assert_eq!(domain.separator(), manual);
    }

    #[test]
    fn permit_struct_hash_matches_manual_encoding() {
        let permit =
            PermitData::new(&usdc(), 1, USDC, OWNER, SPENDER, U256::from(7), U256::from(3));

        let type_hash = b256!("0x6e71edae12b1b97f4d1f60370fef10105fa2faae0126114a169c64845d6126c9");
        let manual = keccak256(
            (type_hash, OWNER, SPENDER, U256::from(7), U256::from(3), U256::MAX).abi_encode(),
        );
        assert_eq!(permit.message().eip712_hash_struct(), manual);
    }

    #[test]
    fn nonce_changes_signing_hash() {
        let permit = PermitData::new(&usdc(), 1, USDC, OWNER, SPENDER, U256::from(7), U256::ZERO);
        let bumped = permit.clone().with_nonce(U256::from(1));
        assert_ne!(permit.signing_hash(), bumped.signing_hash());
        assert_eq!(permit.domain(), bumped.domain());
    }
}
