//! Integration tests for [`UserOpSender`].
use alloy::{
    primitives::{Address, Bytes, Signature, B256, U256},
    rpc::client::RpcClient,
    sol_types::SolValue,
    transports::mock::Asserter,
};
use gasless_account::{delegation_code, Simple7702Account};
use gasless_bundler::{BundlerClient, PollOptions, SenderError, UserOpSender};
use gasless_constants::{
    test_utils::{TEST_CHAIN_ID, TEST_DELEGATE, TEST_ENTRY_POINT, TEST_PAYMASTER},
    ChainConstants, EIP7702_FACTORY_MARKER,
};
use gasless_permit::{EcdsaVerifier, PermitPaymaster};
use gasless_test_utils::{
    provider::mocked_provider, token::MockToken, users::TEST_SIGNERS,
};
use gasless_types::{Call, PERMIT_MODE};
use serde_json::json;

fn bundler() -> (BundlerClient, Asserter) {
    let asserter = Asserter::new();
    let client = RpcClient::mocked(asserter.clone());
    (BundlerClient::new_with_client(client, TEST_ENTRY_POINT), asserter)
}

fn push_bundler_quotes(asserter: &Asserter) {
    asserter.push_success(&json!({
        "slow": { "maxFeePerGas": "0x1", "maxPriorityFeePerGas": "0x1" },
        "standard": { "maxFeePerGas": "0x77359400", "maxPriorityFeePerGas": "0x3b9aca00" },
        "fast": { "maxFeePerGas": "0xb2d05e00", "maxPriorityFeePerGas": "0x77359400" }
    }));
    asserter.push_success(&json!({
        "preVerificationGas": "0xc350",
        "verificationGasLimit": "0x186a0",
        "callGasLimit": "0x30d40",
        "paymasterVerificationGasLimit": "0x1",
        "paymasterPostOpGasLimit": "0x1"
    }));
}

fn sender() -> (
    UserOpSender<impl alloy::providers::Provider, MockToken, EcdsaVerifier>,
    Asserter,
    Asserter,
) {
    let (provider, chain) = mocked_provider();
    let (bundler, bundler_asserter) = bundler();
    let account = Simple7702Account::new(TEST_SIGNERS[0].clone(), ChainConstants::test());
    let sender = UserOpSender::new(
        provider,
        account,
        PermitPaymaster::new(TEST_PAYMASTER),
        MockToken::usdc(),
        EcdsaVerifier,
        bundler,
    );
    (sender, chain, bundler_asserter)
}

fn transfer() -> Call {
    Call::new(Address::repeat_byte(0x89), U256::ZERO, Bytes::from_static(&[0xa9, 0x05, 0x9c, 0xbb]))
}

#[tokio::test]
async fn undelegated_account_attaches_authorization() {
    let (sender, chain, bundler) = sender();

    chain.push_success(&Bytes::from(U256::from(0).abi_encode()));
    chain.push_success(&Bytes::new());
    chain.push_success(&U256::from(3));
    push_bundler_quotes(&bundler);

    let op = sender.prepare(&[transfer()]).await.unwrap();

    assert_eq!(op.factory, Some(EIP7702_FACTORY_MARKER));
    let auth = op.eip7702_auth.as_ref().unwrap();
    assert_eq!(auth.address, TEST_DELEGATE);
    assert_eq!(auth.nonce, 3);

    assert_eq!(op.max_fee_per_gas, U256::from(2_000_000_000u64));
    assert_eq!(op.max_priority_fee_per_gas, U256::from(1_000_000_000u64));
    assert_eq!(op.call_gas_limit, U256::from(200_000));
    // Paymaster limits are set by the paymaster, not the estimate.
    assert_eq!(op.paymaster_verification_gas_limit, Some(U256::from(2_000_000)));
    assert_eq!(op.paymaster_post_op_gas_limit, Some(U256::from(150_000)));
    assert_eq!(op.paymaster, Some(TEST_PAYMASTER));
    assert_eq!(op.paymaster_data.as_ref().unwrap()[0], PERMIT_MODE);

    let hash = op.hash(TEST_ENTRY_POINT, TEST_CHAIN_ID);
    let recovered =
        Signature::from_raw(&op.signature).unwrap().recover_address_from_prehash(&hash).unwrap();
    assert_eq!(recovered, alloy::signers::Signer::address(&TEST_SIGNERS[0]));
}

#[tokio::test]
async fn delegated_account_skips_authorization() {
    let (sender, chain, bundler) = sender();

    chain.push_success(&Bytes::from(U256::from(1).abi_encode()));
    chain.push_success(&delegation_code(TEST_DELEGATE));
    push_bundler_quotes(&bundler);
    bundler.push_success(&B256::repeat_byte(0xab));

    let hash = sender.send(&[transfer(), transfer()]).await.unwrap();
    assert_eq!(hash, B256::repeat_byte(0xab));
}

#[tokio::test]
async fn empty_calls_are_rejected_before_any_request() {
    let (sender, _chain, _bundler) = sender();
    let err = sender.prepare(&[]).await.unwrap_err();
    assert!(matches!(err, SenderError::Account(gasless_account::AccountError::NoCalls)));
}

#[tokio::test]
async fn receipt_is_polled() {
    let (sender, chain, bundler) = sender();

    chain.push_success(&Bytes::from(U256::from(1).abi_encode()));
    chain.push_success(&delegation_code(TEST_DELEGATE));
    push_bundler_quotes(&bundler);
    bundler.push_success(&B256::repeat_byte(0xab));
    bundler.push_success(&json!(null));
    bundler.push_success(&json!({
        "userOpHash": B256::repeat_byte(0xab),
        "entryPoint": TEST_ENTRY_POINT,
        "sender": alloy::signers::Signer::address(&TEST_SIGNERS[0]),
        "nonce": "0x1",
        "actualGasCost": "0x1",
        "actualGasUsed": "0x1",
        "success": true,
        "receipt": {
            "transactionHash": B256::repeat_byte(0xcd),
            "blockHash": B256::repeat_byte(0xef),
            "blockNumber": "0x1"
        }
    }));

    let options = PollOptions::new(
        core::time::Duration::from_millis(1),
        core::time::Duration::from_secs(5),
    );
    let receipt = sender.send_and_wait(&[transfer()], options).await.unwrap();
    assert_eq!(receipt.transaction_hash(), B256::repeat_byte(0xcd));
}
