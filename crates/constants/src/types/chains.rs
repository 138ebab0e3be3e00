use crate::ChainConstants;
use std::str::FromStr;

/// The list of known chains as a string.
const KNOWN_CHAINS: &str = "sepolia, arbitrum-sepolia";

/// Error type for parsing struct from a chain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseChainError {
    /// The chain name is not supported.
    #[error("chain name {0} is not parseable. supported chains: {KNOWN_CHAINS}")]
    ChainNotSupported(String),
}

/// Chains with hard-coded constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum KnownChains {
    /// Ethereum Sepolia.
    #[default]
    Sepolia,
    /// Arbitrum Sepolia.
    ArbitrumSepolia,
    /// Test chain.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownChains {
    /// Get the constants for this chain.
    pub const fn constants(self) -> ChainConstants {
        match self {
            Self::Sepolia => ChainConstants::sepolia(),
            Self::ArbitrumSepolia => ChainConstants::arbitrum_sepolia(),
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => ChainConstants::test(),
        }
    }
}

impl FromStr for KnownChains {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "sepolia" => Ok(Self::Sepolia),
            "arbitrum-sepolia" | "arbitrum_sepolia" | "arbitrumsepolia" => {
                Ok(Self::ArbitrumSepolia)
            }
            _ => Err(ParseChainError::ChainNotSupported(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_chains() {
        assert_eq!("Sepolia".parse::<KnownChains>().unwrap(), KnownChains::Sepolia);
        assert_eq!(
            " arbitrum-sepolia ".parse::<KnownChains>().unwrap(),
            KnownChains::ArbitrumSepolia
        );
        assert_eq!(
            "mainnet".parse::<KnownChains>().unwrap_err(),
            ParseChainError::ChainNotSupported("mainnet".into())
        );
    }

    #[test]
    fn constants_match_chain() {
        assert_eq!(KnownChains::Sepolia.constants().chain_id(), 11155111);
        assert_eq!(KnownChains::ArbitrumSepolia.constants().chain_id(), 421614);
    }
}
