//! The authentication orchestrator.
//!
//! `AuthManager` composes the user directory, credential store, session
//! store, token signer/verifier and verification cache into the
//! engine's use cases. Raw passwords and token strings are never
//! logged.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use authhub_cache::CacheManager;
use authhub_core::config::auth::AuthConfig;
use authhub_core::error::{AppError, ErrorKind};
use authhub_entity::session::Session;
use authhub_entity::user::User;
use authhub_store::repositories::credential::CredentialRepository;
use authhub_store::repositories::session::SessionRepository;
use authhub_store::repositories::user::UserRepository;

use crate::credential::CredentialStore;
use crate::directory::UserDirectory;
use crate::jwt::{signing, Claims, ClaimsCache, JwtDecoder, JwtEncoder, MintedToken};
use crate::password::PasswordHasher;
use crate::session::{ActivityRecorder, SessionStore};

/// A successful login: the new session plus a signed token for it.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub session: Session,
    pub token: MintedToken,
}

/// Orchestrates the credential and session lifecycle.
#[derive(Debug, Clone)]
pub struct AuthManager {
    directory: UserDirectory,
    credentials: CredentialStore,
    sessions: SessionStore,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    claims_cache: ClaimsCache,
    activity: ActivityRecorder,
    token_ttl_seconds: i64,
}

impl AuthManager {
    /// Wires the engine together from config, the key-value store's
    /// repositories and a cache.
    ///
    /// Must be called from within a tokio runtime: the activity
    /// recorder spawns its worker task onto the current one.
    pub fn new(
        config: &AuthConfig,
        users: Arc<UserRepository>,
        credentials: Arc<CredentialRepository>,
        sessions: Arc<SessionRepository>,
        cache: Arc<CacheManager>,
    ) -> Result<Self, AppError> {
        let secret = signing::require_secret(config)?;
        Ok(Self {
            directory: UserDirectory::new(users, Arc::clone(&credentials), Arc::clone(&sessions)),
            credentials: CredentialStore::new(credentials, PasswordHasher::new()),
            sessions: SessionStore::new(Arc::clone(&sessions)),
            encoder: JwtEncoder::new(&secret),
            decoder: JwtDecoder::new(&secret),
            claims_cache: ClaimsCache::new(
                cache,
                Duration::from_secs(config.verify_cache_ttl_seconds),
            ),
            activity: ActivityRecorder::new(sessions, config.activity_queue_depth),
            token_ttl_seconds: config.token_ttl_seconds,
        })
    }

    /// Registers a new user with a password.
    ///
    /// Fails with `AlreadyExists` when the uid is taken; the existing
    /// user and credential are untouched.
    pub async fn register(&self, uid: &str, password: &str) -> Result<User, AppError> {
        let user = self.directory.register(uid).await?;
        self.credentials.create(uid, password).await?;
        Ok(user)
    }

    /// Authenticates a user and opens a fresh session.
    ///
    /// An unknown uid fails with `NotFound`; a wrong password (or a user
    /// with no credential attached) fails with `IncorrectCredentials`.
    pub async fn login(&self, uid: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self.directory.find(uid).await?;
        self.check_password(uid, password).await?;

        let session = self.sessions.issue(&user).await?;
        let token = self
            .encoder
            .mint(&session.session_id, uid, self.token_ttl_seconds)?;
        info!(uid, session_id = %session.session_id, "Login succeeded");
        Ok(LoginResult { session, token })
    }

    /// Ends the session a refresh token belongs to, returning the
    /// revoked session.
    ///
    /// Fails with `InvalidRefreshToken` when no live session matches,
    /// including a repeated logout with the same token.
    pub async fn logout(&self, refresh_token: &str) -> Result<Session, AppError> {
        let session = self
            .sessions
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| {
                AppError::invalid_refresh_token("Refresh token does not match a live session")
            })?;
        let session = self.sessions.revoke(&session.session_id).await.map_err(|err| {
            // Lost a race with a concurrent logout of the same session.
            if err.kind == ErrorKind::NotFound {
                AppError::invalid_refresh_token("Refresh token does not match a live session")
            } else {
                err
            }
        })?;
        info!(uid = %session.user_uid, session_id = %session.session_id, "Logout");
        Ok(session)
    }

    /// Exchanges a refresh token for a fresh signed token.
    ///
    /// The session is looked up live, so a revoked session can never
    /// refresh. The refresh token itself is not rotated; it stays valid
    /// for the life of the session.
    pub async fn refresh(&self, refresh_token: &str) -> Result<MintedToken, AppError> {
        let session = self
            .sessions
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| {
                AppError::invalid_refresh_token("Refresh token does not match a live session")
            })?;

        let token = self
            .encoder
            .mint(&session.session_id, &session.user_uid, self.token_ttl_seconds)?;
        self.activity.record(&session.session_id);
        info!(uid = %session.user_uid, session_id = %session.session_id, "Token refreshed");
        Ok(token)
    }

    /// Verifies a signed token and returns its claims.
    ///
    /// Recently verified tokens are served from the cache; a miss falls
    /// through to full cryptographic verification, whose result is then
    /// cached. Verification is purely cryptographic: it does not consult
    /// the session store, so a revoked session's token stays valid until
    /// it expires.
    pub async fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        if let Some(claims) = self.claims_cache.lookup(token).await {
            return Ok(claims);
        }
        let claims = self.decoder.verify(token)?;
        self.claims_cache.store(token, &claims).await;
        Ok(claims)
    }

    /// Changes a user's password after re-verifying the old one.
    ///
    /// A fresh salt is generated and the old hash discarded. When
    /// `kill_sessions` is set, every session of the user is revoked in
    /// the same call.
    pub async fn change_password(
        &self,
        uid: &str,
        old_password: &str,
        new_password: &str,
        kill_sessions: bool,
    ) -> Result<(), AppError> {
        self.directory.find(uid).await?;
        self.check_password(uid, old_password).await.map_err(|err| {
            if err.kind == ErrorKind::IncorrectCredentials {
                AppError::wrong_password("Current password is incorrect")
            } else {
                err
            }
        })?;

        self.credentials.rotate(uid, new_password).await?;
        if kill_sessions {
            let revoked = self.sessions.revoke_all(uid).await?;
            info!(uid, revoked_sessions = revoked, "Password changed");
        } else {
            info!(uid, "Password changed");
        }
        Ok(())
    }

    /// Revokes every session of a user, returning the count.
    pub async fn terminate_sessions(&self, uid: &str) -> Result<u64, AppError> {
        self.directory.find(uid).await?;
        self.sessions.revoke_all(uid).await
    }

    /// Lists all live sessions for a user.
    pub async fn list_sessions(&self, uid: &str) -> Result<Vec<Session>, AppError> {
        self.directory.find(uid).await?;
        self.sessions.find_all(uid).await
    }

    /// Deletes a user and everything attached to it: credential and all
    /// sessions.
    pub async fn delete_user(&self, uid: &str) -> Result<(), AppError> {
        self.directory.delete(uid).await
    }

    async fn check_password(&self, uid: &str, password: &str) -> Result<(), AppError> {
        let credential = match self.credentials.find(uid).await? {
            Some(credential) => credential,
            None => {
                // A user without a credential cannot authenticate, but
                // the caller only learns the password did not match.
                warn!(uid, "Authentication attempted for user with no credential");
                return Err(AppError::incorrect_credentials("Incorrect credentials"));
            }
        };
        if !self.credentials.verify(&credential, password).await? {
            return Err(AppError::incorrect_credentials("Incorrect credentials"));
        }
        Ok(())
    }
}
