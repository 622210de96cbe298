//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256), hex-encoded.
    ///
    /// Generated once via `authhub_auth::jwt::signing::generate_secret`
    /// and persisted externally; `None` until then. Rotating it
    /// invalidates every outstanding token, a deliberate administrative
    /// action.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Signed token TTL in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: i64,
    /// Verification cache TTL in seconds. Capped per entry at the
    /// token's remaining lifetime.
    #[serde(default = "default_verify_cache_ttl")]
    pub verify_cache_ttl_seconds: u64,
    /// Queue depth for the best-effort activity recorder.
    #[serde(default = "default_activity_queue_depth")]
    pub activity_queue_depth: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_seconds: default_token_ttl(),
            verify_cache_ttl_seconds: default_verify_cache_ttl(),
            activity_queue_depth: default_activity_queue_depth(),
        }
    }
}

fn default_token_ttl() -> i64 {
    3600
}

fn default_verify_cache_ttl() -> u64 {
    30
}

fn default_activity_queue_depth() -> usize {
    256
}
