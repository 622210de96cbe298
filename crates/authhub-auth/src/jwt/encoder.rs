//! Token signing.

use jsonwebtoken::{Algorithm, EncodingKey, Header};

use authhub_core::error::AppError;

use super::claims::{Claims, MintedToken};

/// Signs tokens with a HMAC-SHA256 key.
#[derive(Clone)]
pub struct JwtEncoder {
    key: EncodingKey,
}

impl JwtEncoder {
    /// Builds an encoder from the raw signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
        }
    }

    /// Mints a signed token for a session.
    pub fn mint(
        &self,
        session_id: &str,
        uid: &str,
        ttl_seconds: i64,
    ) -> Result<MintedToken, AppError> {
        let claims = Claims::new(session_id, uid, ttl_seconds);
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|err| {
                AppError::internal(format!("Failed to sign token: {err}"))
            })?;
        Ok(MintedToken { token, claims })
    }
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose key material.
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_produces_three_segments() {
        let encoder = JwtEncoder::new(b"test-secret");
        let minted = encoder.mint("sid", "alice", 3600).unwrap();
        assert_eq!(minted.token.split('.').count(), 3);
        assert_eq!(minted.claims.sid, "sid");
        assert_eq!(minted.claims.uid, "alice");
        assert_eq!(minted.claims.exp - minted.claims.iat, 3600);
    }
}
