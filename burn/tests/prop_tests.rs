use proptest::prelude::*;

use yottaflux_burn::{generate, validate, BurnError, MAX_PREFIX_LEN, TARGET_LEN};
use yottaflux_crypto::decode_check;
use yottaflux_types::VersionByte;

const BASE58_PREFIX: &str = "[1-9A-HJ-NP-Za-km-z]{0,31}";

proptest! {
    /// Any Base58 prefix within the limit generates an address that
    /// validates against the same version byte.
    #[test]
    fn generate_then_validate(prefix in BASE58_PREFIX, version in any::<u8>()) {
        let version = VersionByte(version);
        let addr = generate(&prefix, version).unwrap();
        let result = validate(addr.as_str(), version);
        prop_assert!(result.ok, "{}: {}", addr, result.detail);
        prop_assert_eq!(decode_check(addr.as_str()).unwrap().version, version);
    }

    /// Generation is deterministic.
    #[test]
    fn generate_deterministic(prefix in BASE58_PREFIX) {
        let a = generate(&prefix, VersionByte::MAINNET).unwrap();
        let b = generate(&prefix, VersionByte::MAINNET).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Prefixes longer than the limit are always rejected.
    #[test]
    fn overlong_prefix_rejected(extra in 1usize..16) {
        let prefix = "X".repeat(MAX_PREFIX_LEN + extra);
        let is_too_long = matches!(
            generate(&prefix, VersionByte::MAINNET),
            Err(BurnError::PrefixTooLong { .. })
        );
        prop_assert!(is_too_long);
    }

    /// Validating with a different version byte reports the observed one.
    #[test]
    fn version_mismatch_names_observed(v in any::<u8>(), w in any::<u8>()) {
        prop_assume!(v != w);
        let addr = generate("", VersionByte(v)).unwrap();
        let result = validate(addr.as_str(), VersionByte(w));
        prop_assert!(!result.ok);
        prop_assert_eq!(result.version, Some(VersionByte(v)));
    }
}

#[test]
fn target_len_leaves_checksum_room() {
    assert!(MAX_PREFIX_LEN < TARGET_LEN);
    assert_eq!(TARGET_LEN, 34);
}
