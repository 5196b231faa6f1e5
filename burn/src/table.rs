//! Static table of burn purposes.
//!
//! Each entry maps a purpose to the chain-parameter name it is published
//! under and the padded prefix it is generated from. Version 78 renders a
//! leading `Y`, and the symbol after it must fall in `P`..=`n`, which is why
//! the prefixes use lowercase where a capital would read better
//! (`Yburn` rather than `YBurn`).

use serde::Serialize;
use yottaflux_types::{EncodedAddress, VersionByte};

use crate::{generate, BurnError, FILLER};

/// One burn purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BurnSpec {
    /// Short purpose identifier, e.g. `issueAsset`.
    pub purpose: &'static str,
    /// Chain-parameter name the address is published under.
    pub param: &'static str,
    /// Prefix padded with filler, as fed to the generator.
    pub prefix: &'static str,
}

impl BurnSpec {
    /// The human-readable part of the prefix (trailing filler removed).
    pub fn label(&self) -> &'static str {
        self.prefix.trim_end_matches(FILLER)
    }

    pub fn generate(&self, version: VersionByte) -> Result<EncodedAddress, BurnError> {
        generate(self.prefix, version)
    }

    /// Find an entry by purpose identifier or chain-parameter name.
    pub fn lookup(name: &str) -> Result<&'static BurnSpec, BurnError> {
        BURN_SPECS
            .iter()
            .find(|spec| spec.purpose == name || spec.param == name)
            .ok_or_else(|| BurnError::UnknownPurpose(name.to_string()))
    }
}

pub const BURN_SPECS: &[BurnSpec] = &[
    BurnSpec {
        purpose: "issueAsset",
        param: "strIssueAssetBurnAddress",
        prefix: "YissueAssetXXXXXXXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "reissueAsset",
        param: "strReissueAssetBurnAddress",
        prefix: "YReissueAssetXXXXXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "issueSubAsset",
        param: "strIssueSubAssetBurnAddress",
        prefix: "YissueSubAssetXXXXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "issueUniqueAsset",
        param: "strIssueUniqueAssetBurnAddress",
        prefix: "YissueUniqueAssetXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "issueMsgChannelAsset",
        param: "strIssueMsgChannelAssetBurnAddress",
        prefix: "YissueMsgChanneLAssetXXXXXXXXX",
    },
    BurnSpec {
        purpose: "issueQualifierAsset",
        param: "strIssueQualifierAssetBurnAddress",
        prefix: "YissueQuaLifierXXXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "issueSubQualifierAsset",
        param: "strIssueSubQualifierAssetBurnAddress",
        prefix: "YissueSubQuaLifierXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "issueRestrictedAsset",
        param: "strIssueRestrictedAssetBurnAddress",
        prefix: "YissueRestrictedXXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "addNullQualifierTag",
        param: "strAddNullQualifierTagBurnAddress",
        prefix: "YaddTagBurnXXXXXXXXXXXXXXXXXXX",
    },
    BurnSpec {
        purpose: "globalBurn",
        param: "strGlobalBurnAddress",
        prefix: "YburnXXXXXXXXXXXXXXXXXXXXXXXXX",
    },
];

/// Burn addresses deployed in the mainnet chain parameters, keyed by
/// parameter name.
pub const KNOWN_MAINNET_ADDRESSES: &[(&str, &str)] = &[
    ("strIssueAssetBurnAddress", "YissueAssetXXXXXXXXXXXXXXXXXW8oK1h"),
    ("strReissueAssetBurnAddress", "YReissueAssetXXXXXXXXXXXXXXXYcNAB6"),
    ("strIssueSubAssetBurnAddress", "YissueSubAssetXXXXXXXXXXXXXXcAjBNU"),
    ("strIssueUniqueAssetBurnAddress", "YissueUniqueAssetXXXXXXXXXXXZAr1F6"),
    ("strIssueMsgChannelAssetBurnAddress", "YissueMsgChanneLAssetXXXXXXXdbjHqe"),
    ("strIssueQualifierAssetBurnAddress", "YissueQuaLifierXXXXXXXXXXXXXTQvwL8"),
    ("strIssueSubQualifierAssetBurnAddress", "YissueSubQuaLifierXXXXXXXXXXYJchwm"),
    ("strIssueRestrictedAssetBurnAddress", "YissueRestrictedXXXXXXXXXXXXUkSk3r"),
    ("strAddNullQualifierTagBurnAddress", "YaddTagBurnXXXXXXXXXXXXXXXXXZJAYt2"),
    ("strGlobalBurnAddress", "YburnXXXXXXXXXXXXXXXXXXXXXXXYqtbxJ"),
];
