mod chains;
pub use chains::{KnownChains, ParseChainError};

use alloy::primitives::Address;

/// Addresses and endpoints for one chain.
///
/// These are the values a user operation needs beyond the user's own
/// configuration: where USDC lives, which EntryPoint validates the
/// operation, and which implementation the EIP-7702 account delegates to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConstants {
    /// Human-readable chain name.
    name: &'static str,
    /// Chain ID.
    chain_id: u64,
    /// USDC token address.
    usdc: Address,
    /// ERC-4337 EntryPoint address.
    entry_point: Address,
    /// `Simple7702Account` delegate implementation.
    delegate: Address,
    /// Default RPC endpoint.
    rpc_url: &'static str,
}

impl std::fmt::Display for ChainConstants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {{ usdc: {}, entryPoint: {}, delegate: {} }}",
            self.name, self.chain_id, self.usdc, self.entry_point, self.delegate
        )
    }
}

impl ChainConstants {
    /// Create a new set of chain constants.
    pub const fn new(
        name: &'static str,
        chain_id: u64,
        usdc: Address,
        entry_point: Address,
        delegate: Address,
        rpc_url: &'static str,
    ) -> Self {
        Self { name, chain_id, usdc, entry_point, delegate, rpc_url }
    }

    /// Get the hard-coded Sepolia constants.
    pub const fn sepolia() -> Self {
        crate::chains::sepolia::SEPOLIA
    }

    /// Get the hard-coded Arbitrum Sepolia constants.
    pub const fn arbitrum_sepolia() -> Self {
        crate::chains::arbitrum_sepolia::ARBITRUM_SEPOLIA
    }

    /// Get the hard-coded local test constants.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::TEST_CHAIN
    }

    /// Get the chain name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the USDC token address.
    pub const fn usdc(&self) -> Address {
        self.usdc
    }

    /// Get the EntryPoint address.
    pub const fn entry_point(&self) -> Address {
        self.entry_point
    }

    /// Get the EIP-7702 delegate implementation address.
    pub const fn delegate(&self) -> Address {
        self.delegate
    }

    /// Get the default RPC endpoint.
    pub const fn rpc_url(&self) -> &'static str {
        self.rpc_url
    }

    /// Get the public Pimlico bundler endpoint for this chain.
    pub fn bundler_url(&self) -> String {
        format!("{}/{}/rpc", crate::PIMLICO_PUBLIC_URL, self.chain_id)
    }
}

impl From<KnownChains> for ChainConstants {
    fn from(chain: KnownChains) -> Self {
        chain.constants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundler_url_includes_chain_id() {
        assert_eq!(
            ChainConstants::sepolia().bundler_url(),
            "https://public.pimlico.io/v2/11155111/rpc"
        );
        assert_eq!(
            ChainConstants::arbitrum_sepolia().bundler_url(),
            "https://public.pimlico.io/v2/421614/rpc"
        );
    }

    #[test]
    fn chains_share_entry_point_and_delegate() {
        let sepolia = ChainConstants::sepolia();
        let arb = ChainConstants::arbitrum_sepolia();
        assert_eq!(sepolia.entry_point(), arb.entry_point());
        assert_eq!(sepolia.delegate(), arb.delegate());
        assert_ne!(sepolia.usdc(), arb.usdc());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ChainConstants::test()).unwrap();
        assert_eq!(json["chainId"], 31337);
        assert!(json.get("entryPoint").is_some());
    }
}
