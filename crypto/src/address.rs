//! Base58Check addresses.
//!
//! Address format: Base58(version ‖ payload20 ‖ checksum4), where
//! checksum4 = SHA-256(SHA-256(version ‖ payload20))[0..4].
//! The encoded string is 25 raw bytes, typically 33–35 symbols.

use yottaflux_types::{AddressPayload, Checksum4, EncodedAddress};

use crate::{base58, checksum, CodecError};

/// Raw length of a decoded address: 21-byte payload plus 4-byte checksum.
pub const ADDRESS_LEN: usize = AddressPayload::LEN + Checksum4::LEN;

/// Base58Check-encode an arbitrary payload.
pub fn encode_check(payload: &[u8]) -> String {
    let cs = checksum(payload);
    let mut raw = Vec::with_capacity(payload.len() + Checksum4::LEN);
    raw.extend_from_slice(payload);
    raw.extend_from_slice(cs.as_bytes());
    base58::encode(&raw)
}

/// Encode a 21-byte address payload as a Base58Check address.
pub fn encode_address(payload: &AddressPayload) -> EncodedAddress {
    EncodedAddress::new(encode_check(&payload.to_bytes()))
}

/// Decode a Base58Check address into its version byte and 20-byte payload.
///
/// Fails on a non-alphabet symbol, on a decoded length other than 25, or
/// when the trailing checksum does not match the recomputed one.
pub fn decode_check(address: &str) -> Result<AddressPayload, CodecError> {
    let raw = base58::decode(address)?;
    if raw.len() != ADDRESS_LEN {
        return Err(CodecError::WrongLength {
            expected: ADDRESS_LEN,
            actual: raw.len(),
        });
    }

    let (data, cs) = raw.split_at(AddressPayload::LEN);
    let mut found = [0u8; 4];
    found.copy_from_slice(cs);
    let found = Checksum4::new(found);

    let expected = checksum(data);
    if found != expected {
        return Err(CodecError::ChecksumMismatch { found, expected });
    }

    let mut bytes = [0u8; 21];
    bytes.copy_from_slice(data);
    Ok(AddressPayload::from_bytes(&bytes))
}
