//! Burn-address generation.
//!
//! Algorithm:
//! 1. Pad the prefix with `X` to [`TARGET_LEN`] symbols
//! 2. Base58-decode the padded text to a byte skeleton
//! 3. Force byte 0 to the version byte
//! 4. Truncate or zero-pad to exactly 21 bytes
//! 5. Base58Check-encode (appends the double SHA-256 checksum)
//!
//! How many trailing symbols the checksum rewrites is not fixed; it depends
//! on the checksum's integer value.

use tracing::debug;
use yottaflux_crypto::{base58, encode_address};
use yottaflux_types::{AddressPayload, EncodedAddress, Payload20, VersionByte};

use crate::BurnError;

/// Symbol length of the padded text, the common length of a 25-byte address.
pub const TARGET_LEN: usize = 34;

/// Padding symbol. Any alphabet symbol works; `X` reads as filler.
pub const FILLER: char = 'X';

/// Longest accepted prefix: three symbols stay free for the checksum.
///
/// Deliberately one more than the `TARGET_LEN - 4` (30) limit of the older
/// generator script: a 31-symbol prefix must still generate, 32 must not.
/// Every built-in table prefix is 30 symbols, so table output is identical
/// under either limit.
pub const MAX_PREFIX_LEN: usize = TARGET_LEN - 3;

/// Pad `prefix` with [`FILLER`] up to [`TARGET_LEN`] symbols.
pub fn pad_prefix(prefix: &str) -> Result<String, BurnError> {
    let len = prefix.chars().count();
    if len > MAX_PREFIX_LEN {
        return Err(BurnError::PrefixTooLong {
            prefix: prefix.to_string(),
            max: MAX_PREFIX_LEN,
        });
    }
    let mut padded = String::with_capacity(TARGET_LEN);
    padded.push_str(prefix);
    padded.extend(std::iter::repeat(FILLER).take(TARGET_LEN - len));
    Ok(padded)
}

/// Generate a burn address whose Base58 text starts with `prefix`.
///
/// Fails with [`BurnError::PrefixTooLong`] past [`MAX_PREFIX_LEN`] symbols
/// and with [`BurnError::Codec`] if the prefix holds a non-Base58 symbol.
///
/// The prefix is reproduced verbatim only when it is consistent with the
/// version byte (e.g. a leading `Y` for version 78) and leaves room before
/// the checksum region; callers should check the result if they rely on it.
pub fn generate(prefix: &str, version: VersionByte) -> Result<EncodedAddress, BurnError> {
    let padded = pad_prefix(prefix)?;
    let skeleton = base58::decode(&padded)?;
    let payload = normalize(&skeleton, version);
    let address = encode_address(&payload);

    debug!(
        prefix,
        version = version.as_u8(),
        skeleton_len = skeleton.len(),
        %address,
        "generated burn address"
    );
    Ok(address)
}

/// Force the version byte and fit the skeleton into 21 bytes: skeleton bytes
/// 1..21 become the payload, zero-filled on the right when short.
fn normalize(skeleton: &[u8], version: VersionByte) -> AddressPayload {
    let mut body = [0u8; Payload20::LEN];
    let rest = skeleton.get(1..).unwrap_or(&[]);
    let take = rest.len().min(Payload20::LEN);
    body[..take].copy_from_slice(&rest[..take]);
    AddressPayload::new(version, Payload20::new(body))
}
