//! Outcome of validating an address against an expected version byte.

use serde::{Deserialize, Serialize};

use crate::VersionByte;

/// Error-as-value report from the burn-address validator.
///
/// `version` is `None` when the string could not be decoded at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub version: Option<VersionByte>,
    pub detail: String,
}

impl ValidationResult {
    pub const VALID: &'static str = "Valid";

    pub fn valid(version: VersionByte) -> Self {
        Self {
            ok: true,
            version: Some(version),
            detail: Self::VALID.to_string(),
        }
    }

    pub fn invalid(version: Option<VersionByte>, detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            version,
            detail: detail.into(),
        }
    }

    /// Fixed-width status tag used in reports: `VALID` or `INVALID`.
    pub fn status(&self) -> &'static str {
        if self.ok {
            "VALID"
        } else {
            "INVALID"
        }
    }
}
