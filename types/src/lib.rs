//! Value types for Yottaflux burn addresses.
//!
//! A burn address is a Base58Check string over 25 raw bytes:
//! a version byte, a 20-byte payload and a 4-byte checksum. Everything here
//! is an immutable value; encoding and checksumming live in `yottaflux-crypto`.

pub mod address;
pub mod error;
pub mod hash;
pub mod network;
pub mod payload;
pub mod validation;

pub use address::EncodedAddress;
pub use error::TypeError;
pub use hash::Checksum4;
pub use network::{Network, VersionByte};
pub use payload::{AddressPayload, Payload20};
pub use validation::ValidationResult;
