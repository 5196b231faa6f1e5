use proptest::prelude::*;

use yottaflux_types::{AddressPayload, Network, Payload20, VersionByte};

proptest! {
    /// AddressPayload survives to_bytes -> from_bytes unchanged.
    #[test]
    fn address_payload_bytes_roundtrip(version in any::<u8>(), body in prop::array::uniform20(0u8..)) {
        let payload = AddressPayload::new(VersionByte(version), Payload20::new(body));
        let bytes = payload.to_bytes();
        prop_assert_eq!(bytes[0], version);
        prop_assert_eq!(AddressPayload::from_bytes(&bytes), payload);
    }

    /// Network names parse back to the same network regardless of case.
    #[test]
    fn network_name_roundtrip(testnet in any::<bool>(), upper in any::<bool>()) {
        let net = if testnet { Network::Testnet } else { Network::Mainnet };
        let name = if upper { net.as_str().to_uppercase() } else { net.as_str().to_string() };
        prop_assert_eq!(name.parse::<Network>().unwrap(), net);
    }
}
