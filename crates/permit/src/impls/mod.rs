mod local;

mod token;
pub use token::TokenReader;

mod verifier;
pub use verifier::{EcdsaVerifier, ProviderVerifier};
