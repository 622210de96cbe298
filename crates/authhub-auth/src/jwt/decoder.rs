//! Token verification.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use authhub_core::error::AppError;

use super::claims::Claims;

/// Verifies token signatures and expiry.
#[derive(Clone)]
pub struct JwtDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtDecoder {
    /// Builds a decoder from the raw signing secret.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry must be exact, no grace window.
        validation.leeway = 0;
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verifies a token and returns its claims.
    ///
    /// Expired tokens, bad signatures and structurally invalid input are
    /// reported as distinct error kinds so callers can tell them apart.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        match jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                JwtErrorKind::ExpiredSignature => {
                    Err(AppError::expired_signature("Token has expired"))
                }
                JwtErrorKind::InvalidSignature => {
                    Err(AppError::invalid_signature("Token signature is invalid"))
                }
                _ => Err(AppError::malformed_token(format!(
                    "Token is malformed: {err}"
                ))),
            },
        }
    }
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use authhub_core::error::ErrorKind;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn test_verify_roundtrip() {
        let minted = JwtEncoder::new(SECRET).mint("sid", "alice", 3600).unwrap();
        let claims = JwtDecoder::new(SECRET).verify(&minted.token).unwrap();
        assert_eq!(claims, minted.claims);
    }

    #[test]
    fn test_expired_token() {
        let minted = JwtEncoder::new(SECRET).mint("sid", "alice", -30).unwrap();
        let err = JwtDecoder::new(SECRET).verify(&minted.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpiredSignature);
    }

    #[test]
    fn test_tampered_signature() {
        let minted = JwtEncoder::new(SECRET).mint("sid", "alice", 3600).unwrap();
        // Flip the first character of the signature segment.
        let mut parts: Vec<String> = minted.token.split('.').map(String::from).collect();
        let sig = &mut parts[2];
        let flipped = if sig.starts_with('A') { 'B' } else { 'A' };
        sig.replace_range(0..1, &flipped.to_string());
        let tampered = parts.join(".");

        let err = JwtDecoder::new(SECRET).verify(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSignature);
    }

    #[test]
    fn test_wrong_key() {
        let minted = JwtEncoder::new(SECRET).mint("sid", "alice", 3600).unwrap();
        let err = JwtDecoder::new(b"another-secret")
            .verify(&minted.token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSignature);
    }

    #[test]
    fn test_malformed_token() {
        let decoder = JwtDecoder::new(SECRET);
        for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d", "!!.@@.##"] {
            let err = decoder.verify(garbage).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedToken, "input: {garbage:?}");
        }
    }
}
