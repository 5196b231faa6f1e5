#![no_main]

use libfuzzer_sys::fuzz_target;
use yottaflux_types::VersionByte;

fuzz_target!(|data: &[u8]| {
    // First byte picks the version, the rest is the prefix.
    let Some((&version, rest)) = data.split_first() else {
        return;
    };
    let Ok(prefix) = std::str::from_utf8(rest) else {
        return;
    };

    let version = VersionByte(version);
    if let Ok(address) = yottaflux_burn::generate(prefix, version) {
        assert!(yottaflux_burn::validate(address.as_str(), version).ok);
    }
});
