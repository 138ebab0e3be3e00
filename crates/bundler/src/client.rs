use crate::{
    types::{GasPriceTiers, PollOptions, UserOperationReceipt},
    BundlerError,
};
use alloy::{
    primitives::{Address, B256},
    rpc::client::{ClientBuilder, RpcClient},
    rpc::json_rpc::{RpcRecv, RpcSend},
};
use gasless_constants::ChainConstants;
use gasless_types::{GasEstimate, UserOperation};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// The bundler methods.
const SUPPORTED_ENTRY_POINTS: &str = "eth_supportedEntryPoints";
const GAS_PRICE: &str = "pimlico_getUserOperationGasPrice";
const ESTIMATE_GAS: &str = "eth_estimateUserOperationGas";
const SEND_USER_OPERATION: &str = "eth_sendUserOperation";
const USER_OPERATION_RECEIPT: &str = "eth_getUserOperationReceipt";

/// ERC-4337 bundler JSON-RPC client, bound to one EntryPoint.
#[derive(Debug, Clone)]
pub struct BundlerClient {
    /// The JSON-RPC client.
    client: RpcClient,
    /// The EntryPoint passed with every user operation.
    entry_point: Address,
}

impl BundlerClient {
    /// Create a new bundler client with the given RPC client.
    pub const fn new_with_client(client: RpcClient, entry_point: Address) -> Self {
        Self { client, entry_point }
    }

    /// Instantiate a new bundler client over HTTP.
    pub fn new(url: Url, entry_point: Address) -> Self {
        Self::new_with_client(ClientBuilder::default().http(url), entry_point)
    }

    /// Create a new bundler client given a string URL.
    pub fn new_from_string(url: &str, entry_point: Address) -> Result<Self, BundlerError> {
        let url = Url::parse(url)?;
        Ok(Self::new(url, entry_point))
    }

    /// Connect to the public Pimlico bundler for `constants`' chain.
    pub fn pimlico(constants: &ChainConstants) -> Result<Self, BundlerError> {
        Self::new_from_string(&constants.bundler_url(), constants.entry_point())
    }

    /// Get the RPC client used to send requests.
    pub const fn client(&self) -> &RpcClient {
        &self.client
    }

    /// Get the EntryPoint.
    pub const fn entry_point(&self) -> Address {
        self.entry_point
    }

    async fn request_inner<Params, Resp>(
        &self,
        method: &'static str,
        params: Params,
    ) -> Result<Resp, BundlerError>
    where
        Params: RpcSend,
        Resp: RpcRecv,
    {
        self.client
            .request(method, params)
            .await
            .inspect_err(|e| warn!(%e, method, "bundler request failed"))
            .map_err(Into::into)
    }

    /// Get the EntryPoints the bundler accepts.
    #[instrument(skip_all)]
    pub async fn supported_entry_points(&self) -> Result<Vec<Address>, BundlerError> {
        self.client
            .request_noparams(SUPPORTED_ENTRY_POINTS)
            .await
            .inspect_err(|e| warn!(%e, "bundler request failed"))
            .map_err(Into::into)
    }

    /// Get the bundler's fee suggestions.
    #[instrument(skip_all)]
    pub async fn gas_price(&self) -> Result<GasPriceTiers, BundlerError> {
        self.client
            .request_noparams(GAS_PRICE)
            .await
            .inspect_err(|e| warn!(%e, "bundler request failed"))
            .map_err(Into::into)
    }

    /// Estimate gas limits for `op`. The operation should carry a dummy
    /// signature of the right shape.
    #[instrument(skip_all, fields(sender = %op.sender, nonce = %op.nonce))]
    pub async fn estimate_user_operation_gas(
        &self,
        op: &UserOperation,
    ) -> Result<GasEstimate, BundlerError> {
        self.request_inner(ESTIMATE_GAS, (op.clone(), self.entry_point)).await
    }

    /// Submit a signed operation, returning its hash.
    #[instrument(skip_all, fields(sender = %op.sender, nonce = %op.nonce))]
    pub async fn send_user_operation(&self, op: &UserOperation) -> Result<B256, BundlerError> {
        self.request_inner(SEND_USER_OPERATION, (op.clone(), self.entry_point)).await
    }

    /// Get the receipt of an operation, if it has been included.
    pub async fn user_operation_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<UserOperationReceipt>, BundlerError> {
        self.request_inner(USER_OPERATION_RECEIPT, (hash,)).await
    }

    /// Poll for the receipt of an operation until it is included or
    /// `options.timeout` elapses.
    #[instrument(skip_all, fields(%hash))]
    pub async fn wait_for_receipt(
        &self,
        hash: B256,
        options: PollOptions,
    ) -> Result<UserOperationReceipt, BundlerError> {
        let start = Instant::now();
        loop {
            if let Some(receipt) = self.user_operation_receipt(hash).await? {
                info!(
                    tx = %receipt.transaction_hash(),
                    success = receipt.success,
                    "user operation included"
                );
                return Ok(receipt);
            }
            if start.elapsed() >= options.timeout {
                return Err(BundlerError::ReceiptTimeout { hash, timeout: options.timeout });
            }
            debug!("receipt not yet available");
            tokio::time::sleep(options.interval).await;
        }
    }
}
