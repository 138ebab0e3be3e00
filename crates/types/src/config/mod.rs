mod error;
pub use error::ConfigError;

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use gasless_constants::ChainConstants;
use url::Url;

/// Environment variable selecting the chain.
pub const CHAIN: &str = "CHAIN";
/// Environment variable overriding the node RPC URL.
pub const RPC_URL: &str = "RPC_URL";
/// Environment variable overriding the bundler RPC URL.
pub const BUNDLER_URL: &str = "BUNDLER_URL";
/// Environment variable holding the owner's hex private key.
pub const OWNER_PRIVATE_KEY: &str = "OWNER_PRIVATE_KEY";
/// Environment variable overriding the USDC token address.
pub const USDC_ADDRESS: &str = "USDC_ADDRESS";
/// Environment variable holding the paymaster address.
pub const PAYMASTER_ADDRESS: &str = "PAYMASTER_V08_ADDRESS";
/// Environment variable holding the transfer or swap recipient.
pub const RECIPIENT_ADDRESS: &str = "RECIPIENT_ADDRESS";
/// Environment variable holding the MXNB token address.
pub const MXNB_ADDRESS: &str = "MXNB_ADDRESS";
/// Environment variable holding the swap router address.
pub const SWAP_ROUTER_ADDRESS: &str = "SWAP_ROUTER_ADDRESS";
/// Environment variable holding the ERC-6492 signature validator address.
pub const SIG_VALIDATOR_ADDRESS: &str = "SIG_VALIDATOR_ADDRESS";

/// Configuration for a gasless session.
///
/// Required values are the owner key and the paymaster. Everything else has
/// a per-chain default or is only needed by specific commands, which check
/// for it through the `require_*` accessors.
#[derive(Debug, Clone)]
pub struct GaslessConfig {
    chain: ChainConstants,
    rpc_url: Url,
    bundler_url: Url,
    owner: PrivateKeySigner,
    usdc: Address,
    paymaster: Address,
    recipient: Option<Address>,
    mxnb: Option<Address>,
    swap_router: Option<Address>,
    sig_validator: Option<Address>,
}

impl GaslessConfig {
    /// Create a configuration with the chain's default endpoints and USDC.
    pub fn new(
        chain: ChainConstants,
        owner: PrivateKeySigner,
        paymaster: Address,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            chain,
            rpc_url: Url::parse(chain.rpc_url())?,
            bundler_url: Url::parse(&chain.bundler_url())?,
            owner,
            usdc: chain.usdc(),
            paymaster,
            recipient: None,
            mxnb: None,
            swap_router: None,
            sig_validator: None,
        })
    }

    /// Override the node RPC URL.
    pub fn with_rpc_url(self, rpc_url: Url) -> Self {
        Self { rpc_url, ..self }
    }

    /// Override the bundler RPC URL.
    pub fn with_bundler_url(self, bundler_url: Url) -> Self {
        Self { bundler_url, ..self }
    }

    /// Override the USDC address.
    pub fn with_usdc(self, usdc: Address) -> Self {
        Self { usdc, ..self }
    }

    /// Set the recipient.
    pub fn with_recipient(self, recipient: Address) -> Self {
        Self { recipient: Some(recipient), ..self }
    }

    /// Set the MXNB token address.
    pub fn with_mxnb(self, mxnb: Address) -> Self {
        Self { mxnb: Some(mxnb), ..self }
    }

    /// Set the swap router address.
    pub fn with_swap_router(self, swap_router: Address) -> Self {
        Self { swap_router: Some(swap_router), ..self }
    }

    /// Set the ERC-6492 signature validator.
    pub fn with_sig_validator(self, sig_validator: Address) -> Self {
        Self { sig_validator: Some(sig_validator), ..self }
    }

    /// Get the chain constants.
    pub const fn chain(&self) -> &ChainConstants {
        &self.chain
    }

    /// Get the node RPC URL.
    pub const fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Get the bundler RPC URL.
    pub const fn bundler_url(&self) -> &Url {
        &self.bundler_url
    }

    /// Get the owner signer.
    pub const fn owner(&self) -> &PrivateKeySigner {
        &self.owner
    }

    /// Get the USDC address.
    pub const fn usdc(&self) -> Address {
        self.usdc
    }

    /// Get the paymaster address.
    pub const fn paymaster(&self) -> Address {
        self.paymaster
    }

    /// Get the ERC-6492 signature validator, if configured.
    pub const fn sig_validator(&self) -> Option<Address> {
        self.sig_validator
    }

    /// Get the recipient, failing if it is not configured.
    pub fn require_recipient(&self) -> Result<Address, ConfigError> {
        self.recipient.ok_or(ConfigError::Missing(RECIPIENT_ADDRESS))
    }

    /// Get the MXNB token, failing if it is not configured.
    pub fn require_mxnb(&self) -> Result<Address, ConfigError> {
        self.mxnb.ok_or(ConfigError::Missing(MXNB_ADDRESS))
    }

    /// Get the swap router, failing if it is not configured.
    pub fn require_swap_router(&self) -> Result<Address, ConfigError> {
        self.swap_router.ok_or(ConfigError::Missing(SWAP_ROUTER_ADDRESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0x0101010101010101010101010101010101010101010101010101010101010101";

    fn config() -> GaslessConfig {
        GaslessConfig::new(
            ChainConstants::sepolia(),
            KEY.parse().unwrap(),
            Address::repeat_byte(0x8c),
        )
        .unwrap()
    }

    #[test]
    fn defaults_follow_chain() {
        let config = config();
        assert_eq!(config.usdc(), ChainConstants::sepolia().usdc());
        assert_eq!(config.bundler_url().as_str(), "https://public.pimlico.io/v2/11155111/rpc");
        assert_eq!(config.rpc_url().as_str(), "https://sepolia.drpc.org/");
    }

    #[test]
    fn optional_values_fail_fast() {
        let config = config();
        assert!(matches!(config.require_recipient(), Err(ConfigError::Missing(RECIPIENT_ADDRESS))));
        assert!(matches!(config.require_mxnb(), Err(ConfigError::Missing(MXNB_ADDRESS))));
        assert_eq!(config.sig_validator(), None);

        let recipient = Address::repeat_byte(0x33);
        assert_eq!(config.with_recipient(recipient).require_recipient().unwrap(), recipient);
    }

    #[test]
    fn owner_key_parses() {
        let config = config();
        let expected: PrivateKeySigner = KEY.parse().unwrap();
        assert_eq!(config.owner().address(), expected.address());
    }

    #[test]
    fn error_messages_name_the_variable() {
        assert_eq!(
            ConfigError::Missing(SWAP_ROUTER_ADDRESS).to_string(),
            "missing required configuration: SWAP_ROUTER_ADDRESS"
        );
    }
}
