use super::{connect, execute};
use alloy::primitives::U256;
use gasless_bundler::PollOptions;
use gasless_types::{Call, ConfigError, GaslessConfig, IERC20Permit};
use tracing::info;

/// Transfer `amount` USDC to the configured recipient.
pub(crate) async fn transfer(
    config: &GaslessConfig,
    amount: U256,
    poll: PollOptions,
) -> eyre::Result<()> {
    let call = transfer_call(config, amount)?;
    execute(config, connect(config), &[call], poll).await?;
    Ok(())
}

/// The USDC `transfer` call paying `amount` to the recipient.
fn transfer_call(config: &GaslessConfig, amount: U256) -> Result<Call, ConfigError> {
    let recipient = config.require_recipient()?;
    info!(%recipient, %amount, "transferring USDC");
    Ok(Call::contract(config.usdc(), &IERC20Permit::transferCall { to: recipient, amount }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::Address, sol_types::SolCall};
    use gasless_constants::ChainConstants;
    use gasless_test_utils::{test_constants::TEST_PAYMASTER, users::TEST_SIGNERS};

    fn config() -> GaslessConfig {
        GaslessConfig::new(ChainConstants::sepolia(), TEST_SIGNERS[0].clone(), TEST_PAYMASTER)
            .unwrap()
    }

    #[test]
    fn calls_usdc_transfer() {
        let recipient = Address::repeat_byte(0x33);
        let config = config().with_recipient(recipient);

        let call = transfer_call(&config, U256::from(10_000)).unwrap();
        assert_eq!(call.to, ChainConstants::sepolia().usdc());
        assert_eq!(call.value, U256::ZERO);

        let decoded = IERC20Permit::transferCall::abi_decode(&call.data).unwrap();
        assert_eq!(decoded.to, recipient);
        assert_eq!(decoded.amount, U256::from(10_000));
    }

    #[test]
    fn requires_recipient() {
        let err = transfer_call(&config(), U256::from(1)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(gasless_types::env::RECIPIENT_ADDRESS)));
    }
}
