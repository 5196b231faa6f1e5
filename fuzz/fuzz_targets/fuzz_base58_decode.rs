#![no_main]

use libfuzzer_sys::fuzz_target;
use yottaflux_crypto::base58;

fuzz_target!(|data: &[u8]| {
    // Encoding arbitrary bytes must always decode back to the same bytes.
    let encoded = base58::encode(data);
    let decoded = base58::decode(&encoded).expect("encoder output is valid Base58");
    assert_eq!(decoded, data);

    // Decoding arbitrary text must never panic, and whatever decodes must
    // re-encode to the same string (leading '1's included).
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(bytes) = base58::decode(text) {
            assert_eq!(base58::encode(&bytes), text);
        }
    }
});
