//! Cache key builders for all AuthHub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to
//! find every key the application uses. Raw token strings never appear
//! in keys; they are hashed first.

use sha2::{Digest, Sha256};

/// Prefix applied to all AuthHub cache keys.
const PREFIX: &str = "authhub";

/// Cache key for the verified claims of a signed token.
pub fn token_claims(token: &str) -> String {
    format!("{PREFIX}:jwt:claims:{}", token_digest(token))
}

/// SHA-256 digest of a raw token, hex-encoded.
fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_keys_are_stable_and_token_free() {
        let token = "header.payload.signature";
        let key = token_claims(token);
        assert_eq!(key, token_claims(token));
        assert!(key.starts_with("authhub:jwt:claims:"));
        assert!(!key.contains("payload"));
        assert_ne!(key, token_claims("header.payload.signaturf"));
    }
}
