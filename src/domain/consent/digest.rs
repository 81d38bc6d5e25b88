//! One-way payload digests.
//!
//! Consent payloads are never stored raw; only their SHA-256 fingerprint
//! is persisted, rendered as lowercase hexadecimal.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Computes the SHA-256 digest of a payload as lowercase hex.
pub fn sha256_hex(payload: &str) -> String {
    let hash = Sha256::digest(payload.as_bytes());
    hex::encode(hash)
}

/// Compares two digest strings in constant time.
pub fn digests_match(stored: &str, computed: &str) -> bool {
    stored.as_bytes().ct_eq(computed.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(sha256_hex("consent-v1"), sha256_hex("consent-v1"));
    }

    #[test]
    fn digest_is_lowercase_hex_of_256_bits() {
        let digest = sha256_hex("consent-v1");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn known_vector() {
        // sha256("abc")
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn single_character_change_flips_the_digest() {
        assert_ne!(sha256_hex("consent-v1"), sha256_hex("consent-v2"));
    }

    #[test]
    fn matching_is_exact() {
        let digest = sha256_hex("payload");
        assert!(digests_match(&digest, &sha256_hex("payload")));
        assert!(!digests_match(&digest, &sha256_hex("Payload")));
        assert!(!digests_match(&digest, "deadbeef"));
    }
}
