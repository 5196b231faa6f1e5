//! Double SHA-256 hashing for Base58Check checksums.

use sha2::{Digest, Sha256};
use yottaflux_types::Checksum4;

/// Compute SHA-256(SHA-256(data)).
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Base58Check checksum: the first 4 bytes of `sha256d(payload)`.
pub fn checksum(payload: &[u8]) -> Checksum4 {
    let digest = sha256d(payload);
    let mut cs = [0u8; 4];
    cs.copy_from_slice(&digest[..4]);
    Checksum4::new(cs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256d_known_vector() {
        // sha256d("hello")
        let h = sha256d(b"hello");
        assert_eq!(
            hex::encode(h),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn sha256d_empty() {
        assert_eq!(
            hex::encode(sha256d(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn checksum_is_digest_prefix() {
        let payload = [78u8; 21];
        let digest = sha256d(&payload);
        assert_eq!(checksum(&payload).as_bytes(), &digest[..4]);
    }

    #[test]
    fn checksum_deterministic() {
        let a = checksum(b"yottaflux");
        let b = checksum(b"yottaflux");
        assert_eq!(a, b);
        assert_ne!(a, checksum(b"yottaflu"));
    }
}
