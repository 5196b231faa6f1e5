//! Codec errors.

use thiserror::Error;
use yottaflux_types::Checksum4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid Base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("decoded to {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("checksum mismatch: got {found}, expected {expected}")]
    ChecksumMismatch {
        found: Checksum4,
        expected: Checksum4,
    },

    #[error("malformed Base58 input: {0}")]
    Malformed(String),
}
