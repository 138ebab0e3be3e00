use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};
use clap::{Parser, Subcommand};
use gasless_bundler::PollOptions;
use gasless_constants::KnownChains;
use gasless_types::{env, ConfigError, GaslessConfig};
use std::time::Duration;
use url::Url;

/// Pay gas in USDC from an EIP-7702 smart account.
#[derive(Debug, Parser)]
#[command(name = "gasless", author, version, about, long_about = None)]
pub(crate) struct Args {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,
    /// Seconds between user operation receipt requests.
    #[arg(long, value_name = "SECONDS", default_value_t = 2)]
    pub(crate) poll_interval: u64,
    /// Seconds to wait for a user operation receipt.
    #[arg(long, value_name = "SECONDS", default_value_t = 120)]
    pub(crate) poll_timeout: u64,
    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Args {
    pub(crate) const fn poll_options(&self) -> PollOptions {
        PollOptions::new(
            Duration::from_secs(self.poll_interval),
            Duration::from_secs(self.poll_timeout),
        )
    }
}

/// Connection and account settings. Every value can also be given through
/// the environment, under the names in [`gasless_types::env`].
#[derive(Debug, clap::Args)]
pub(crate) struct ConfigArgs {
    /// The chain to operate on.
    #[arg(long, env = env::CHAIN, default_value = "sepolia")]
    chain: KnownChains,
    /// Node RPC endpoint. Defaults to a public endpoint for the chain.
    #[arg(long, env = env::RPC_URL)]
    rpc_url: Option<Url>,
    /// Bundler RPC endpoint. Defaults to the public Pimlico bundler.
    #[arg(long, env = env::BUNDLER_URL)]
    bundler_url: Option<Url>,
    /// Hex private key of the account owner.
    #[arg(long, env = env::OWNER_PRIVATE_KEY, hide_env_values = true)]
    owner_private_key: PrivateKeySigner,
    /// USDC token. Defaults to Circle's USDC on the chain.
    #[arg(long, env = env::USDC_ADDRESS)]
    usdc: Option<Address>,
    /// The permit paymaster.
    #[arg(long, env = env::PAYMASTER_ADDRESS)]
    paymaster: Address,
    /// Recipient of transfers and swaps.
    #[arg(long, env = env::RECIPIENT_ADDRESS)]
    recipient: Option<Address>,
    /// The MXNB token, `currency0` of the swap pool.
    #[arg(long, env = env::MXNB_ADDRESS)]
    mxnb: Option<Address>,
    /// The swap router.
    #[arg(long, env = env::SWAP_ROUTER_ADDRESS)]
    swap_router: Option<Address>,
    /// ERC-6492 validator used to check permit signatures of undeployed
    /// smart accounts.
    #[arg(long, env = env::SIG_VALIDATOR_ADDRESS)]
    sig_validator: Option<Address>,
}

impl ConfigArgs {
    /// Build the session configuration.
    pub(crate) fn into_config(self) -> Result<GaslessConfig, ConfigError> {
        let mut config =
            GaslessConfig::new(self.chain.constants(), self.owner_private_key, self.paymaster)?;
        if let Some(url) = self.rpc_url {
            config = config.with_rpc_url(url);
        }
        if let Some(url) = self.bundler_url {
            config = config.with_bundler_url(url);
        }
        if let Some(usdc) = self.usdc {
            config = config.with_usdc(usdc);
        }
        if let Some(recipient) = self.recipient {
            config = config.with_recipient(recipient);
        }
        if let Some(mxnb) = self.mxnb {
            config = config.with_mxnb(mxnb);
        }
        if let Some(swap_router) = self.swap_router {
            config = config.with_swap_router(swap_router);
        }
        if let Some(sig_validator) = self.sig_validator {
            config = config.with_sig_validator(sig_validator);
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show the account's USDC balance and whether it can pay for gas.
    Balance,
    /// Transfer USDC to the recipient.
    Transfer {
        /// Amount in USDC base units (6 decimals).
        #[arg(long, default_value = "10000")]
        amount: U256,
    },
    /// Swap MXNB for USDC through the swap router, sending the output to the
    /// recipient.
    Swap {
        /// Amount of MXNB in base units (18 decimals).
        #[arg(long, default_value = "1000000000000000000")]
        amount_in: U256,
        /// Approve the router for `amount_in` in the same user operation.
        #[arg(long)]
        approve: bool,
    },
}
