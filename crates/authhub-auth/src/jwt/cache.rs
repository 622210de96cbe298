//! Verification cache for signed tokens.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use authhub_cache::keys;
use authhub_cache::CacheManager;
use authhub_core::traits::cache::CacheProvider;

use super::claims::Claims;

/// Caches verified token claims for a short window.
///
/// The cache is a pure optimization: every failure degrades to a miss
/// and the caller re-verifies cryptographically. Keys are digests of
/// the raw token, so token strings never land in the cache.
#[derive(Debug, Clone)]
pub struct ClaimsCache {
    cache: Arc<CacheManager>,
    ttl: Duration,
}

impl ClaimsCache {
    pub fn new(cache: Arc<CacheManager>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Looks up cached claims for a token. Cache errors degrade to a
    /// miss.
    pub async fn lookup(&self, token: &str) -> Option<Claims> {
        match self.cache.get_json::<Claims>(&keys::token_claims(token)).await {
            Ok(found) => found,
            Err(err) => {
                warn!(error = %err, "Claims cache lookup failed, treating as miss");
                None
            }
        }
    }

    /// Caches verified claims for a token.
    ///
    /// The entry lives for the configured window, capped at the token's
    /// remaining lifetime so a cache hit can never outlive the token
    /// itself. Already-expired claims are never cached. Failures are
    /// logged and swallowed.
    pub async fn store(&self, token: &str, claims: &Claims) {
        let remaining = claims.remaining_ttl();
        if remaining.is_zero() {
            return;
        }
        let ttl = self.ttl.min(remaining);
        if let Err(err) = self
            .cache
            .set_json(&keys::token_claims(token), claims, ttl)
            .await
        {
            warn!(error = %err, "Failed to cache verified claims");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authhub_core::config::cache::CacheConfig;
    use chrono::Utc;

    fn make_cache(ttl: Duration) -> ClaimsCache {
        let manager = CacheManager::new(&CacheConfig::default()).unwrap();
        ClaimsCache::new(Arc::new(manager), ttl)
    }

    #[tokio::test]
    async fn test_store_and_lookup() {
        let cache = make_cache(Duration::from_secs(30));
        let claims = Claims::new("sid", "alice", 3600);

        assert!(cache.lookup("token").await.is_none());
        cache.store("token", &claims).await;
        assert_eq!(cache.lookup("token").await, Some(claims));
        assert!(cache.lookup("other-token").await.is_none());
    }

    #[tokio::test]
    async fn test_ttl_capped_at_token_lifetime() {
        // Window far longer than the token life; the entry must expire
        // with the token.
        let cache = make_cache(Duration::from_secs(3600));
        let claims = Claims::new("sid", "alice", 2);
        cache.store("token", &claims).await;
        assert!(cache.lookup("token").await.is_some());

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert!(cache.lookup("token").await.is_none());
    }

    #[tokio::test]
    async fn test_hit_never_served_past_expiry() {
        let cache = make_cache(Duration::from_secs(30));
        // Expiry lands mid-second; a whole-second remaining-life figure
        // would keep the entry alive past it.
        let now = Utc::now();
        let claims = Claims {
            sid: "sid".into(),
            uid: "alice".into(),
            iat: now.timestamp(),
            exp: now.timestamp() + 1,
        };
        cache.store("token", &claims).await;

        while !claims.is_expired() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(cache.lookup("token").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_claims_never_cached() {
        let cache = make_cache(Duration::from_secs(30));
        let claims = Claims::new("sid", "alice", -30);
        cache.store("token", &claims).await;
        assert!(cache.lookup("token").await.is_none());
    }
}
