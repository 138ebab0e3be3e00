//! An in-memory EIP-2612 token.
use alloy::primitives::{Address, U256};
use gasless_permit::ReadableToken;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

/// Error returned by a [`MockToken`] set to fail.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("mock token read failed")]
pub struct MockTokenError;

/// A mock [`ReadableToken`] with settable permit state.
#[derive(Debug, Clone)]
pub struct MockToken {
    address: Address,
    chain_id: u64,
    name: String,
    version: String,
    nonce: Arc<Mutex<U256>>,
    reads: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl MockToken {
    /// Create a token with nonce zero.
    pub fn new(address: Address, chain_id: u64, name: &str, version: &str) -> Self {
        Self {
            address,
            chain_id,
            name: name.to_owned(),
            version: version.to_owned(),
            nonce: Arc::default(),
            reads: Arc::default(),
            fail: Arc::default(),
        }
    }

    /// A USDC-like token at [`TEST_USDC`] on [`TEST_CHAIN_ID`].
    ///
    /// [`TEST_USDC`]: gasless_constants::test_utils::TEST_USDC
    /// [`TEST_CHAIN_ID`]: gasless_constants::test_utils::TEST_CHAIN_ID
    pub fn usdc() -> Self {
        use gasless_constants::test_utils::{TEST_CHAIN_ID, TEST_USDC};
        Self::new(TEST_USDC, TEST_CHAIN_ID, "USDC", "2")
    }

    /// Set the nonce returned for every owner.
    pub fn set_nonce(&self, nonce: U256) {
        *self.nonce.lock().unwrap() = nonce;
    }

    /// Make every subsequent read fail.
    pub fn fail_reads(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Number of reads served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read<T>(&self, value: T) -> Result<T, MockTokenError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(MockTokenError);
        }
        Ok(value)
    }
}

impl ReadableToken for MockToken {
    type Error = MockTokenError;

    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn name(&self) -> Result<String, Self::Error> {
        self.read(self.name.clone())
    }

    async fn version(&self) -> Result<String, Self::Error> {
        self.read(self.version.clone())
    }

    async fn nonces(&self, _owner: Address) -> Result<U256, Self::Error> {
        let nonce = *self.nonce.lock().unwrap();
        self.read(nonce)
    }
}
