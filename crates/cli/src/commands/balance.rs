use super::connect;
use alloy::{
    primitives::{utils::format_units, U256},
    providers::Provider,
};
use gasless_constants::{USDC_DECIMALS, USDC_FAUCET_URL};
use gasless_permit::TokenReader;
use gasless_types::GaslessConfig;
use tracing::{info, warn};

/// Balance below which the account cannot reliably pay for gas: 1 USDC.
const MIN_BALANCE: U256 = U256::from_limbs([1_000_000, 0, 0, 0]);

/// Report the account's USDC balance.
pub(crate) async fn balance(config: &GaslessConfig) -> eyre::Result<()> {
    let token = TokenReader::new(connect(config), config.usdc(), config.chain().chain_id());
    report(config, &token).await?;
    Ok(())
}

/// Log the balance and a faucet hint when it is too low to pay for gas.
/// Returns true if the account is funded.
async fn report<P: Provider>(config: &GaslessConfig, token: &TokenReader<P>) -> eyre::Result<bool> {
    let account = config.owner().address();
    let balance = token.balance_of(account).await?;
    let formatted = format_units(balance, USDC_DECIMALS)?;
    info!(%account, usdc = %config.usdc(), balance = %formatted, "USDC balance");

    let funded = balance >= MIN_BALANCE;
    if funded {
        info!("account has enough USDC to pay for gas");
    } else {
        warn!(
            %account,
            chain = config.chain().name(),
            faucet = USDC_FAUCET_URL,
            "fund the account with USDC before sending operations"
        );
    }
    Ok(funded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::Bytes, sol_types::SolValue};
    use gasless_constants::ChainConstants;
    use gasless_test_utils::{provider::mocked_provider, test_constants::TEST_PAYMASTER};

    fn config() -> GaslessConfig {
        let owner = gasless_test_utils::users::TEST_SIGNERS[0].clone();
        GaslessConfig::new(ChainConstants::sepolia(), owner, TEST_PAYMASTER).unwrap()
    }

    #[tokio::test]
    async fn one_usdc_is_enough() {
        let config = config();
        let (provider, asserter) = mocked_provider();
        let token = TokenReader::new(provider, config.usdc(), config.chain().chain_id());

        asserter.push_success(&Bytes::from(U256::from(999_999).abi_encode()));
        assert!(!report(&config, &token).await.unwrap());

        asserter.push_success(&Bytes::from(MIN_BALANCE.abi_encode()));
        assert!(report(&config, &token).await.unwrap());
    }

    #[tokio::test]
    async fn read_failure_is_reported() {
        let config = config();
        let (provider, asserter) = mocked_provider();
        let token = TokenReader::new(provider, config.usdc(), config.chain().chain_id());

        asserter.push_failure_msg("execution reverted");
        assert!(report(&config, &token).await.is_err());
    }
}
