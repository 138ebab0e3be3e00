/// An error that can occur when parsing an ERC-6492 wrapped signature.
#[derive(Debug, thiserror::Error)]
pub enum Erc6492Error {
    /// The magic suffix is present, but the wrapped payload does not
    /// ABI-decode as `(address, bytes, bytes)`.
    #[error("malformed ERC-6492 signature: {0}")]
    Decode(#[from] alloy::sol_types::Error),
    /// The unwrapped signature is empty.
    #[error("ERC-6492 signature wraps an empty inner signature")]
    EmptyInner,
}
