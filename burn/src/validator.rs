//! Burn-address validation.
//!
//! [`validate`] never fails: every decode error and version mismatch comes
//! back as a [`ValidationResult`] with `ok == false`, so a batch of addresses
//! can be audited past the first bad one. [`check`] is the `Result` form.

use tracing::{debug, trace};
use yottaflux_crypto::decode_check;
use yottaflux_types::{AddressPayload, ValidationResult, VersionByte};

use crate::BurnError;

/// Decode `address` and require its version byte to be `expected`.
pub fn check(address: &str, expected: VersionByte) -> Result<AddressPayload, BurnError> {
    let decoded = decode_check(address)?;
    if decoded.version != expected {
        return Err(BurnError::VersionMismatch {
            found: decoded.version,
            expected,
        });
    }
    Ok(decoded)
}

/// Validate `address` against `expected`, reporting failures as data.
///
/// `version` is set whenever the checksum verified, including on a version
/// mismatch, and absent when decoding failed.
pub fn validate(address: &str, expected: VersionByte) -> ValidationResult {
    let result = match check(address, expected) {
        Ok(decoded) => ValidationResult::valid(decoded.version),
        Err(err) => {
            let observed = match &err {
                BurnError::VersionMismatch { found, .. } => Some(*found),
                _ => None,
            };
            ValidationResult::invalid(observed, err.to_string())
        }
    };

    if result.ok {
        trace!(address, "burn address valid");
    } else {
        debug!(address, detail = %result.detail, "burn address invalid");
    }
    result
}

/// Validate every address in turn; one failure does not stop the rest.
pub fn validate_all<'a, I>(addresses: I, expected: VersionByte) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = &'a str>,
{
    addresses
        .into_iter()
        .map(|address| validate(address, expected))
        .collect()
}
