//! Network identifier and address version byte.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypeError;

/// The leading byte of an address payload, identifying its network/class.
///
/// Any value is syntactically legal; callers compare against the value they
/// expect rather than relying on a fixed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionByte(pub u8);

impl VersionByte {
    /// Production network, renders as a leading `Y`.
    pub const MAINNET: Self = Self(78);
    /// Test network, renders as a leading `m` or `n`.
    pub const TESTNET: Self = Self(111);

    pub fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for VersionByte {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<VersionByte> for u8 {
    fn from(version: VersionByte) -> Self {
        version.0
    }
}

impl fmt::Display for VersionByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies which Yottaflux network an address belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network.
    #[default]
    Mainnet,
    /// The public test network.
    Testnet,
}

impl Network {
    /// Version byte used for pay-to-pubkey-hash addresses on this network.
    pub fn version_byte(&self) -> VersionByte {
        match self {
            Self::Mainnet => VersionByte::MAINNET,
            Self::Testnet => VersionByte::TESTNET,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Mainnet),
            "test" | "testnet" => Ok(Self::Testnet),
            _ => Err(TypeError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
