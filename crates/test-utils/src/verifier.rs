//! Signature verifiers with a fixed verdict.
use alloy::primitives::{Address, Bytes, B256};
use core::convert::Infallible;
use gasless_permit::SignatureVerifier;
use std::sync::{Arc, Mutex};

/// A verification request seen by [`MockVerifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    /// The claimed signer.
    pub signer: Address,
    /// The digest that was signed.
    pub digest: B256,
    /// The signature bytes.
    pub signature: Bytes,
}

/// A mock [`SignatureVerifier`] that returns a fixed verdict and captures
/// requests.
#[derive(Debug, Clone)]
pub struct MockVerifier {
    verdict: bool,
    requests: Arc<Mutex<Vec<VerifyRequest>>>,
}

impl MockVerifier {
    /// A verifier accepting every signature.
    pub fn accepting() -> Self {
        Self { verdict: true, requests: Arc::default() }
    }

    /// A verifier rejecting every signature.
    pub fn rejecting() -> Self {
        Self { verdict: false, requests: Arc::default() }
    }

    /// Get all verification requests.
    pub fn requests(&self) -> Vec<VerifyRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SignatureVerifier for MockVerifier {
    type Error = Infallible;

    async fn verify_typed_data(
        &self,
        signer: Address,
        digest: B256,
        signature: &[u8],
    ) -> Result<bool, Self::Error> {
        self.requests.lock().unwrap().push(VerifyRequest {
            signer,
            digest,
            signature: Bytes::copy_from_slice(signature),
        });
        Ok(self.verdict)
    }
}
