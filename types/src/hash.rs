//! Base58Check checksum type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The first four bytes of the double SHA-256 digest of an address payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum4([u8; 4]);

impl Checksum4 {
    pub const LEN: usize = 4;

    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Debug for Checksum4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum4({})", hex::encode(self.0))
    }
}

impl fmt::Display for Checksum4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_hex() {
        let cs = Checksum4::new([0xDE, 0xAD, 0x00, 0x0f]);
        assert_eq!(cs.to_string(), "dead000f");
        assert_eq!(format!("{cs:?}"), "Checksum4(dead000f)");
    }
}
