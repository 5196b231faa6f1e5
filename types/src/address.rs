//! Base58Check-encoded address string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Base58 string that decodes to exactly 25 raw bytes
/// (version ‖ payload ‖ checksum).
///
/// Only the codec in `yottaflux-crypto` constructs these, so holding one
/// means the string was produced by a checksummed encode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedAddress(String);

impl EncodedAddress {
    /// Wrap an already-encoded string. Callers are expected to have produced
    /// `raw` with a Base58Check encoder.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of Base58 symbols (all ASCII, so bytes == chars).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EncodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
