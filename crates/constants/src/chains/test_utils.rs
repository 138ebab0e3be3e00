use crate::ChainConstants;
use alloy::primitives::Address;

/// Test chain id.
pub const TEST_CHAIN_ID: u64 = 31337;

/// Test address for USDC.
pub const TEST_USDC: Address = Address::repeat_byte(0x89);

/// Test address for the EntryPoint.
pub const TEST_ENTRY_POINT: Address = Address::repeat_byte(0x43);

/// Test address for the 7702 delegate.
pub const TEST_DELEGATE: Address = Address::repeat_byte(0x77);

/// Test address for the paymaster.
pub const TEST_PAYMASTER: Address = Address::repeat_byte(0x8c);

/// Local RPC endpoint, never contacted in tests.
pub const TEST_RPC_URL: &str = "http://localhost:8545";

/// Test chain constants.
pub const TEST_CHAIN: ChainConstants = ChainConstants::new(
    "Test",
    TEST_CHAIN_ID,
    TEST_USDC,
    TEST_ENTRY_POINT,
    TEST_DELEGATE,
    TEST_RPC_URL,
);
