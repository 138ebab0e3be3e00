//! Providers backed by a queue of canned responses.
use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::mock::Asserter,
};

/// Create a provider answering from a fresh [`Asserter`]. Responses are
/// consumed in the order they are pushed.
pub fn mocked_provider() -> (impl Provider + Clone + 'static, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    (provider, asserter)
}
