use crate::signing::Erc6492Error;
use alloy::primitives::{b256, Address, Bytes, B256};
use alloy::sol_types::SolValue;

/// Suffix identifying an ERC-6492 wrapped signature.
///
/// [ERC-6492]: https://eips.ethereum.org/EIPS/eip-6492
pub const ERC6492_MAGIC: B256 =
    b256!("0x6492649264926492649264926492649264926492649264926492649264926492");

/// A signature that may carry ERC-6492 deployment data.
///
/// Smart accounts that are not yet deployed (or, for EIP-7702 accounts, not
/// yet delegated) sign with the format
/// `abi.encode(factory, factoryCalldata, innerSig) ++ ERC6492_MAGIC`. A
/// contract consuming the signature directly (such as a token's `permit`)
/// only understands the inner signature, so it must be unwrapped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc6492Signature {
    /// Factory used to deploy the signer, if wrapped.
    pub factory: Option<Address>,
    /// Calldata for the factory, if wrapped.
    pub factory_data: Option<Bytes>,
    /// The canonical signature.
    pub signature: Bytes,
}

impl Erc6492Signature {
    /// True if the bytes end with [`ERC6492_MAGIC`].
    pub fn is_wrapped(signature: &[u8]) -> bool {
        signature.len() >= 32 && signature[signature.len() - 32..] == ERC6492_MAGIC[..]
    }

    /// Parse a possibly wrapped signature. Signatures without the magic
    /// suffix are returned unchanged, with no factory data.
    pub fn parse(signature: &[u8]) -> Result<Self, Erc6492Error> {
        if !Self::is_wrapped(signature) {
            return Ok(Self {
                factory: None,
                factory_data: None,
                signature: Bytes::copy_from_slice(signature),
            });
        }

        let payload = &signature[..signature.len() - 32];
        let (factory, factory_data, inner) = <(Address, Bytes, Bytes)>::abi_decode_params(payload)?;
        if inner.is_empty() {
            return Err(Erc6492Error::EmptyInner);
        }

        Ok(Self { factory: Some(factory), factory_data: Some(factory_data), signature: inner })
    }

    /// Wrap `signature` with deployment data.
    pub fn wrap(factory: Address, factory_data: Bytes, signature: Bytes) -> Bytes {
        let mut buf = (factory, factory_data, signature).abi_encode_params();
        buf.extend_from_slice(ERC6492_MAGIC.as_slice());
        buf.into()
    }

    /// Get the canonical signature, discarding any deployment data.
    pub fn into_signature(self) -> Bytes {
        self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, bytes, hex};

    #[test]
    fn plain_signature_is_unchanged() {
        let sig = Bytes::from(vec![0xab; 65]);
        let parsed = Erc6492Signature::parse(&sig).unwrap();
        assert_eq!(parsed.factory, None);
        assert_eq!(parsed.factory_data, None);
        assert_eq!(parsed.signature, sig);
    }

    #[test]
    fn known_vector_unwraps() {
        let factory = address!("0xcafebabecafebabecafebabecafebabecafebabe");
        let factory_data = bytes!("0xdeadbeef");
        let inner = Bytes::from(vec![0x11; 65]);

        // abi.encode(address,bytes,bytes) ++ magic, laid out by hand.
        let mut wrapped = Vec::new();
        wrapped.extend_from_slice(&[0u8; 12]);
        wrapped.extend_from_slice(factory.as_slice());
        wrapped.extend_from_slice(&B256::left_padding_from(&[0x60])[..]);
        wrapped.extend_from_slice(&B256::left_padding_from(&[0xa0])[..]);
        wrapped.extend_from_slice(&B256::left_padding_from(&[0x04])[..]);
        wrapped.extend_from_slice(&B256::right_padding_from(&hex!("deadbeef"))[..]);
        wrapped.extend_from_slice(&B256::left_padding_from(&[65])[..]);
        wrapped.extend_from_slice(&[0x11; 65]);
        wrapped.extend_from_slice(&[0u8; 31]);
        wrapped.extend_from_slice(ERC6492_MAGIC.as_slice());

        assert_eq!(
            Bytes::from(wrapped.clone()),
            Erc6492Signature::wrap(factory, factory_data.clone(), inner.clone())
        );

        let parsed = Erc6492Signature::parse(&wrapped).unwrap();
        assert_eq!(parsed.factory, Some(factory));
        assert_eq!(parsed.factory_data, Some(factory_data));
        assert_eq!(parsed.into_signature(), inner);
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let mut wrapped = vec![0u8; 40];
        wrapped.extend_from_slice(ERC6492_MAGIC.as_slice());
        assert!(matches!(Erc6492Signature::parse(&wrapped), Err(Erc6492Error::Decode(_))));
    }

    #[test]
    fn empty_inner_is_rejected() {
        let wrapped = Erc6492Signature::wrap(Address::ZERO, Bytes::new(), Bytes::new());
        assert!(matches!(Erc6492Signature::parse(&wrapped), Err(Erc6492Error::EmptyInner)));
    }

    #[test]
    fn short_input_is_not_wrapped() {
        assert!(!Erc6492Signature::is_wrapped(&[0x64, 0x92]));
        assert!(Erc6492Signature::is_wrapped(ERC6492_MAGIC.as_slice()));
    }
}
