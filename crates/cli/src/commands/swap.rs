use super::{connect, execute};
use alloy::primitives::{
    address,
    aliases::{I24, U24},
    Address, Bytes, U256,
};
use chrono::Utc;
use gasless_bundler::PollOptions;
use gasless_types::{Call, GaslessConfig, IERC20Permit, ISwapRouter};
use tracing::info;

/// Hook contract of the MXNB/USDC pool.
const POOL_HOOKS: Address = address!("0x0515E5b569611Db2eC5C6E0CD6cFc79bf9aca080");

/// Fee flag marking the pool fee as set dynamically by the hook.
const DYNAMIC_FEE: U24 = U24::from_limbs([0x800000]);

const TICK_SPACING: I24 = I24::from_raw(U24::from_limbs([10]));

/// Seconds the swap remains executable.
const SWAP_VALIDITY: i64 = 3600;

/// The MXNB/USDC pool.
fn pool_key(mxnb: Address, usdc: Address) -> ISwapRouter::PoolKey {
    ISwapRouter::PoolKey {
        currency0: mxnb,
        currency1: usdc,
        fee: DYNAMIC_FEE,
        tickSpacing: TICK_SPACING,
        hooks: POOL_HOOKS,
    }
}

/// Calls swapping `amount_in` MXNB for USDC, delivered to `receiver`.
fn swap_calls(
    router: Address,
    pool: ISwapRouter::PoolKey,
    amount_in: U256,
    receiver: Address,
    deadline: U256,
    approve: bool,
) -> Vec<Call> {
    let mut calls = Vec::with_capacity(2);
    if approve {
        calls.push(Call::contract(
            pool.currency0,
            &IERC20Permit::approveCall { spender: router, amount: amount_in },
        ));
    }
    calls.push(Call::contract(
        router,
        &ISwapRouter::swapExactTokensForTokensCall {
            amountIn: amount_in,
            amountOutMin: U256::ZERO,
            zeroForOne: true,
            poolKey: pool,
            hookData: Bytes::new(),
            receiver,
            deadline,
        },
    ));
    calls
}

/// Swap `amount_in` MXNB for USDC through the router.
pub(crate) async fn swap(
    config: &GaslessConfig,
    amount_in: U256,
    approve: bool,
    poll: PollOptions,
) -> eyre::Result<()> {
    let recipient = config.require_recipient()?;
    let router = config.require_swap_router()?;
    let pool = pool_key(config.require_mxnb()?, config.usdc());
    let deadline = U256::from(Utc::now().timestamp().saturating_add(SWAP_VALIDITY).max(0) as u64);

    info!(
        %router,
        token0 = %pool.currency0,
        token1 = %pool.currency1,
        hooks = %pool.hooks,
        %amount_in,
        "starting swap"
    );

    let calls = swap_calls(router, pool, amount_in, recipient, deadline, approve);
    execute(config, connect(config), &calls, poll).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    const ROUTER: Address = Address::repeat_byte(0x33);
    const MXNB: Address = Address::repeat_byte(0x44);
    const USDC: Address = Address::repeat_byte(0x89);

    #[test]
    fn pool_key_matches_pool() {
        let key = pool_key(MXNB, USDC);
        assert_eq!(key.fee.to::<u32>(), 0x800000);
        assert_eq!(i32::try_from(key.tickSpacing).unwrap(), 10);
        assert_eq!(key.currency0, MXNB);
        assert_eq!(key.currency1, USDC);
    }

    #[test]
    fn approve_prepends_allowance() {
        let amount = U256::from(1_000_000_000_000_000_000u128);
        let calls = swap_calls(ROUTER, pool_key(MXNB, USDC), amount, USDC, U256::from(1), true);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].to, MXNB);
        let approve = IERC20Permit::approveCall::abi_decode(&calls[0].data).unwrap();
        assert_eq!(approve.spender, ROUTER);
        assert_eq!(approve.amount, amount);

        let swap = ISwapRouter::swapExactTokensForTokensCall::abi_decode(&calls[1].data).unwrap();
        assert_eq!(calls[1].to, ROUTER);
        assert_eq!(swap.amountIn, amount);
        assert!(swap.zeroForOne);
        assert!(swap.hookData.is_empty());
    }

    #[test]
    fn swap_alone() {
        let calls =
            swap_calls(ROUTER, pool_key(MXNB, USDC), U256::from(1), USDC, U256::from(1), false);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to, ROUTER);
    }
}
