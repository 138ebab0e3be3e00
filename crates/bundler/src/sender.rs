use crate::{BundlerClient, PollOptions, SenderError, UserOperationReceipt};
use alloy::{
    primitives::B256,
    providers::Provider,
    signers::{local::PrivateKeySigner, Signer},
};
use gasless_account::Simple7702Account;
use gasless_permit::{PermitPaymaster, ReadableToken, SignatureVerifier};
use gasless_types::{Call, UserOperation};
use tracing::{debug, info, instrument, warn};

/// Builds, signs and submits user operations from a [`Simple7702Account`],
/// paying gas through a [`PermitPaymaster`].
///
/// `UserOpSender` is generic over:
/// - `P`: A [`Provider`] for chain reads
/// - `T`: The [`ReadableToken`] the paymaster is paid in
/// - `V`: A [`SignatureVerifier`] checking the permit signature
/// - `S`: The owner [`Signer`]
#[derive(Debug, Clone)]
pub struct UserOpSender<P, T, V, S = PrivateKeySigner> {
    provider: P,
    account: Simple7702Account<S>,
    paymaster: PermitPaymaster,
    token: T,
    verifier: V,
    bundler: BundlerClient,
}

impl<P, T, V, S> UserOpSender<P, T, V, S> {
    /// Create a new sender.
    pub const fn new(
        provider: P,
        account: Simple7702Account<S>,
        paymaster: PermitPaymaster,
        token: T,
        verifier: V,
        bundler: BundlerClient,
    ) -> Self {
        Self { provider, account, paymaster, token, verifier, bundler }
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Get a reference to the account.
    pub const fn account(&self) -> &Simple7702Account<S> {
        &self.account
    }

    /// Get a reference to the paymaster.
    pub const fn paymaster(&self) -> &PermitPaymaster {
        &self.paymaster
    }

    /// Get a reference to the fee token.
    pub const fn token(&self) -> &T {
        &self.token
    }

    /// Get a reference to the bundler client.
    pub const fn bundler(&self) -> &BundlerClient {
        &self.bundler
    }
}

impl<P, T, V, S> UserOpSender<P, T, V, S>
where
    P: Provider,
    T: ReadableToken + Sync,
    V: SignatureVerifier + Sync,
    S: Signer + Send + Sync,
{
    /// Build and sign a user operation executing `calls`, ready for
    /// submission.
    ///
    /// The operation carries an EIP-7702 authorization unless the account
    /// is already delegated, and a fresh paymaster permit.
    #[instrument(skip_all, fields(sender = %self.account.address(), calls = calls.len()))]
    pub async fn prepare(&self, calls: &[Call]) -> Result<UserOperation, SenderError> {
        let call_data = Simple7702Account::<S>::encode_calls(calls)?;
        let nonce = self.account.entry_point_nonce(&self.provider).await?;
        let mut op = UserOperation::new(self.account.address(), nonce, call_data);

        if !self.account.is_delegated(&self.provider).await? {
            let auth_nonce = self.account.authorization_nonce(&self.provider).await?;
            debug!(auth_nonce, "account not delegated, attaching authorization");
            op = op.with_authorization(self.account.sign_authorization(auth_nonce).await?);
        }

        let fields =
            self.paymaster.paymaster_fields(&self.token, &self.verifier, &self.account).await?;
        let fees = self.bundler.gas_price().await?.standard;
        op = op
            .with_fees(fees)
            .with_paymaster(fields)
            .with_signature(self.account.dummy_signature());

        let estimate = self.bundler.estimate_user_operation_gas(&op).await?;
        debug!(
            call_gas = %estimate.call_gas_limit,
            verification_gas = %estimate.verification_gas_limit,
            pre_verification_gas = %estimate.pre_verification_gas,
            "estimated gas"
        );
        op = op.with_gas(estimate);

        let signature = self.account.sign_user_operation(&op).await?;
        Ok(op.with_signature(signature))
    }

    /// Build, sign and submit a user operation executing `calls`, returning
    /// the user operation hash.
    pub async fn send(&self, calls: &[Call]) -> Result<B256, SenderError> {
        let op = self.prepare(calls).await?;
        let expected = op.hash(self.account.entry_point(), self.account.constants().chain_id());

        let hash = self.bundler.send_user_operation(&op).await?;
        if hash != expected {
            warn!(%hash, %expected, "bundler returned an unexpected user operation hash");
        }
        info!(%hash, "user operation submitted");
        Ok(hash)
    }

    /// Submit a user operation executing `calls` and wait for its receipt.
    pub async fn send_and_wait(
        &self,
        calls: &[Call],
        options: PollOptions,
    ) -> Result<UserOperationReceipt, SenderError> {
        let hash = self.send(calls).await?;
        self.bundler.wait_for_receipt(hash, options).await.map_err(Into::into)
    }
}
