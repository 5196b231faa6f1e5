//! Base58 encoding without checksum, over the Bitcoin alphabet.
//!
//! Bytes are treated as one big-endian unsigned integer. Every leading
//! `0x00` byte maps to one leading `'1'` symbol and vice versa, since the
//! integer conversion alone would drop them.

use crate::CodecError;

/// Base58 alphabet (58 chars, no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Whether every character of `s` is a Base58 symbol.
pub fn is_base58(s: &str) -> bool {
    s.bytes().all(|b| ALPHABET.contains(&b))
}

/// Encode bytes as a Base58 string.
///
/// An empty input yields an empty string; an all-zero input yields one
/// `'1'` per byte.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a Base58 string to bytes.
///
/// The output is the leading-`'1'` count of zero bytes followed by the
/// minimal big-endian representation of the numeral (nothing when it is 0).
pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
    bs58::decode(s).into_vec().map_err(|err| match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            invalid_character(s, character, index)
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            let character = s
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            invalid_character(s, character, index)
        }
        other => CodecError::Malformed(other.to_string()),
    })
}

/// bs58 reports byte offsets; positions are counted in characters.
fn invalid_character(s: &str, character: char, index: usize) -> CodecError {
    let position = s.get(..index).map_or(index, |head| head.chars().count());
    CodecError::InvalidCharacter {
        character,
        position,
    }
}
