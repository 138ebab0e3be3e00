use alloy::primitives::{Address, Bytes, B256, U256, U64};
use core::time::Duration;
use gasless_types::GasFees;
use serde::{Deserialize, Serialize};

/// Fee suggestions returned by `pimlico_getUserOperationGasPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPriceTiers {
    /// Slow inclusion.
    pub slow: GasFees,
    /// Standard inclusion. This tier is used for submissions.
    pub standard: GasFees,
    /// Fast inclusion.
    pub fast: GasFees,
}

/// The transaction that included a user operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    /// Bundle transaction hash.
    pub transaction_hash: B256,
    /// Block hash.
    pub block_hash: B256,
    /// Block number.
    pub block_number: U64,
}

/// Receipt returned by `eth_getUserOperationReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationReceipt {
    /// The user operation hash.
    pub user_op_hash: B256,
    /// The EntryPoint that executed it.
    pub entry_point: Address,
    /// The sender.
    pub sender: Address,
    /// The sender's EntryPoint nonce.
    pub nonce: U256,
    /// The paymaster that paid, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster: Option<Address>,
    /// Gas cost charged, in wei.
    pub actual_gas_cost: U256,
    /// Gas used.
    pub actual_gas_used: U256,
    /// Whether execution succeeded.
    pub success: bool,
    /// Revert data on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Bytes>,
    /// The including transaction.
    pub receipt: TransactionInfo,
}

impl UserOperationReceipt {
    /// Get the hash of the including transaction.
    pub const fn transaction_hash(&self) -> B256 {
        self.receipt.transaction_hash
    }
}

/// Polling behavior for [`BundlerClient::wait_for_receipt`].
///
/// [`BundlerClient::wait_for_receipt`]: crate::BundlerClient::wait_for_receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay between receipt requests.
    pub interval: Duration,
    /// Give up after this long.
    pub timeout: Duration,
}

impl PollOptions {
    /// Default delay between receipt requests.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);
    /// Default timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    /// Create new poll options.
    pub const fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL, Self::DEFAULT_TIMEOUT)
    }
}
