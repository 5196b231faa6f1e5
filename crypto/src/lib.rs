//! Address codecs for Yottaflux.
//!
//! - **Base58** over the Bitcoin alphabet, with arbitrary-precision base
//!   conversion and leading-zero preservation
//! - **Double SHA-256** for the 4-byte Base58Check checksum
//! - **Base58Check** encode/decode of 21-byte address payloads

pub mod address;
pub mod base58;
pub mod error;
pub mod hash;

pub use address::{decode_check, encode_address, encode_check, ADDRESS_LEN};
pub use error::CodecError;
pub use hash::{checksum, sha256d};
