//! Burn addresses: keyless Base58Check addresses that provably destroy value.
//!
//! A burn address is built from a human-readable prefix padded with `X`
//! filler to a full address length. The padded text is Base58-decoded into a
//! byte skeleton, the version byte is forced, and the result is re-encoded
//! with a valid checksum. The readable prefix survives; the last few symbols
//! become the checksum. No hash160 preimage is known for the contrived
//! payload, so nobody holds a key that can spend from it.
//!
//! This crate handles:
//! - Generation from a prefix and version byte
//! - Validation of addresses as error-as-value reports
//! - The static table of burn purposes used by the chain parameters

pub mod error;
pub mod generator;
pub mod table;
pub mod validator;

pub use error::BurnError;
pub use generator::{generate, pad_prefix, FILLER, MAX_PREFIX_LEN, TARGET_LEN};
pub use table::{BurnSpec, BURN_SPECS, KNOWN_MAINNET_ADDRESSES};
pub use validator::{check, validate, validate_all};
