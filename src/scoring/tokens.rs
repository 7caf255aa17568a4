use base64::{engine::general_purpose, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate the opaque public key for a new identity anchor: SHA-256 over
/// 32 bytes of OS randomness, hex-encoded. The key is never recomputed and
/// no signature is ever checked against it; the store's UNIQUE constraint
/// surfaces the (astronomically unlikely) collision.
pub fn generate_identity_key() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}

/// Generate a URL-safe verification token from 32 bytes of OS randomness.
/// No challenge-response flow consumes it; it is recorded with the
/// verification row as an opaque artifact.
pub fn generate_verification_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_is_fixed_length_hex() {
        let key = generate_identity_key();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn identity_keys_do_not_repeat() {
        let a = generate_identity_key();
        let b = generate_identity_key();
        assert_ne!(a, b);
    }

    #[test]
    fn verification_token_is_url_safe() {
        let token = generate_verification_token();
        // 32 bytes -> 43 chars of unpadded base64url
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn verification_tokens_do_not_repeat() {
        let a = generate_verification_token();
        let b = generate_verification_token();
        assert_ne!(a, b);
    }
}
