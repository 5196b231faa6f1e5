//! Raw address payload: version byte followed by a hash160-sized body.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::VersionByte;

/// A 20-byte identifier. For burn addresses this is not a real hash160 but
/// a byte string contrived from padded text, so no private key maps to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payload20([u8; 20]);

impl Payload20 {
    pub const LEN: usize = 20;

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Debug for Payload20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload20({})", hex::encode(self.0))
    }
}

/// `VersionByte ‖ Payload20`, always exactly 21 bytes before checksumming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressPayload {
    pub version: VersionByte,
    pub payload: Payload20,
}

impl AddressPayload {
    pub const LEN: usize = 1 + Payload20::LEN;

    pub fn new(version: VersionByte, payload: Payload20) -> Self {
        Self { version, payload }
    }

    pub fn from_bytes(bytes: &[u8; 21]) -> Self {
        let mut body = [0u8; 20];
        body.copy_from_slice(&bytes[1..]);
        Self {
            version: VersionByte(bytes[0]),
            payload: Payload20(body),
        }
    }

    pub fn to_bytes(&self) -> [u8; 21] {
        let mut out = [0u8; 21];
        out[0] = self.version.0;
        out[1..].copy_from_slice(&self.payload.0);
        out
    }
}
