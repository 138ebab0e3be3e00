mod balance;
pub(crate) use balance::balance;

mod swap;
pub(crate) use swap::swap;

mod transfer;
pub(crate) use transfer::transfer;

use alloy::{
    primitives::B256,
    providers::{Provider, ProviderBuilder},
};
use gasless_account::Simple7702Account;
use gasless_bundler::{BundlerClient, PollOptions, UserOpSender};
use gasless_permit::{PermitPaymaster, ProviderVerifier, TokenReader};
use gasless_types::{Call, GaslessConfig};
use tracing::info;

/// Connect to the configured node.
fn connect(config: &GaslessConfig) -> impl Provider + Clone {
    ProviderBuilder::new().connect_http(config.rpc_url().clone())
}

/// Check the paymaster, then submit `calls` as one user operation and wait
/// for it to be included.
async fn execute<P: Provider + Clone>(
    config: &GaslessConfig,
    provider: P,
    calls: &[Call],
    poll: PollOptions,
) -> eyre::Result<B256> {
    let chain = *config.chain();
    let account = Simple7702Account::new(config.owner().clone(), chain);
    info!(account = %account.address(), chain = %chain, "using account");

    let paymaster = PermitPaymaster::new(config.paymaster());
    paymaster.ensure_deployed(&provider).await?;
    info!(paymaster = %paymaster.address(), "paymaster found");

    let mut verifier = ProviderVerifier::new(provider.clone());
    if let Some(validator) = config.sig_validator() {
        verifier = verifier.with_validator(validator);
    }

    let sender = UserOpSender::new(
        provider.clone(),
        account,
        paymaster,
        TokenReader::new(provider, config.usdc(), chain.chain_id()),
        verifier,
        BundlerClient::new(config.bundler_url().clone(), chain.entry_point()),
    );

    let hash = sender.send(calls).await?;
    info!(%hash, "user operation hash");

    let receipt = sender.bundler().wait_for_receipt(hash, poll).await?;
    if !receipt.success {
        eyre::bail!("user operation {hash} reverted in transaction {}", receipt.transaction_hash());
    }
    info!(tx = %receipt.transaction_hash(), "transaction hash");
    Ok(receipt.transaction_hash())
}
