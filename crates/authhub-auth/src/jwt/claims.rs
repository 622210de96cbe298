//! Token claims.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims carried by a signed token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Session id the token was minted for.
    pub sid: String,
    /// User the session belongs to.
    pub uid: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Mints claims for a session with the given lifetime.
    pub fn new(sid: impl Into<String>, uid: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sid: sid.into(),
            uid: uid.into(),
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Whether the expiry has passed.
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }

    /// Time until expiry, zero when already expired.
    ///
    /// Measured at millisecond granularity; `exp` is a whole second, so
    /// rounding the remainder up would overstate the token's life by up
    /// to a second at the boundary.
    pub fn remaining_ttl(&self) -> Duration {
        let millis = self
            .exp
            .saturating_mul(1000)
            .saturating_sub(Utc::now().timestamp_millis());
        Duration::from_millis(millis.max(0) as u64)
    }
}

/// A freshly minted token together with its claims.
#[derive(Debug, Clone)]
pub struct MintedToken {
    /// Compact serialized JWT.
    pub token: String,
    /// Claims embedded in the token.
    pub claims: Claims,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_claims_not_expired() {
        let claims = Claims::new("sid", "alice", 3600);
        assert!(!claims.is_expired());
        assert!(claims.remaining_ttl() > Duration::from_secs(3590));
    }

    #[test]
    fn test_past_claims_expired() {
        let claims = Claims::new("sid", "alice", -30);
        assert!(claims.is_expired());
        assert_eq!(claims.remaining_ttl(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_remaining_ttl_has_subsecond_granularity() {
        let claims = Claims::new("sid", "alice", 60);
        let first = claims.remaining_ttl();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = claims.remaining_ttl();

        // A whole-second clock would report the same value most of the
        // time and jump by a full second otherwise.
        let elapsed = first - second;
        assert!(elapsed >= Duration::from_millis(50), "elapsed: {elapsed:?}");
        assert!(elapsed <= Duration::from_millis(900), "elapsed: {elapsed:?}");
    }
}
