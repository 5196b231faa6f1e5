#![no_main]

use libfuzzer_sys::fuzz_target;
use yottaflux_types::VersionByte;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Must never panic; a successful decode must re-encode to the input.
    if let Ok(payload) = yottaflux_crypto::decode_check(text) {
        assert_eq!(yottaflux_crypto::encode_address(&payload).as_str(), text);
        let result = yottaflux_burn::validate(text, payload.version);
        assert!(result.ok);
    } else {
        let result = yottaflux_burn::validate(text, VersionByte::MAINNET);
        assert!(!result.ok);
        assert!(result.version.is_none());
    }
});
