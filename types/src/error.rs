//! Errors raised when constructing value types from untrusted input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("unknown network: {0} (expected \"mainnet\" or \"testnet\")")]
    UnknownNetwork(String),
}
