//! Shared test helpers for integration tests.

use std::sync::Arc;

use authhub_auth::jwt::signing;
use authhub_auth::AuthManager;
use authhub_cache::CacheManager;
use authhub_core::config::auth::AuthConfig;
use authhub_core::config::cache::CacheConfig;
use authhub_core::config::store::StoreConfig;
use authhub_store::repositories::credential::CredentialRepository;
use authhub_store::repositories::session::SessionRepository;
use authhub_store::repositories::user::UserRepository;

/// A fully wired in-memory engine for integration tests.
pub struct TestEngine {
    pub manager: AuthManager,
    pub config: AuthConfig,
    pub sessions: Arc<SessionRepository>,
}

impl TestEngine {
    /// Wires an engine over the in-memory store and cache with a fresh
    /// signing secret.
    pub fn new() -> Self {
        Self::with_config(AuthConfig::default())
    }

    /// Wires an engine with the given auth config; a signing secret is
    /// generated if the config has none.
    pub fn with_config(mut config: AuthConfig) -> Self {
        authhub_core::logging::init(&authhub_core::config::logging::LoggingConfig::default());

        if config.jwt_secret.is_none() {
            signing::generate_secret(&mut config).expect("Failed to generate signing secret");
        }

        let store = authhub_store::StoreManager::new(&StoreConfig::default())
            .expect("Failed to init store")
            .provider();
        let users = Arc::new(UserRepository::new(Arc::clone(&store)));
        let credentials = Arc::new(CredentialRepository::new(Arc::clone(&store)));
        let sessions = Arc::new(SessionRepository::new(Arc::clone(&store)));
        let cache = Arc::new(
            CacheManager::new(&CacheConfig::default()).expect("Failed to init cache"),
        );

        let manager = AuthManager::new(
            &config,
            users,
            credentials,
            Arc::clone(&sessions),
            cache,
        )
        .expect("Failed to wire auth manager");

        Self {
            manager,
            config,
            sessions,
        }
    }

    /// Registers a user, panicking on failure.
    pub async fn create_test_user(&self, uid: &str, password: &str) {
        self.manager
            .register(uid, password)
            .await
            .expect("Failed to register test user");
    }
}
