//! Burn-address errors.

use thiserror::Error;
use yottaflux_crypto::CodecError;
use yottaflux_types::VersionByte;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BurnError {
    #[error("prefix {prefix:?} too long (max {max} chars)")]
    PrefixTooLong { prefix: String, max: usize },

    #[error("wrong version byte: {found} (expected {expected})")]
    VersionMismatch {
        found: VersionByte,
        expected: VersionByte,
    },

    #[error("unknown burn purpose: {0}")]
    UnknownPurpose(String),

    #[error("{0}")]
    Codec(#[from] CodecError),
}
