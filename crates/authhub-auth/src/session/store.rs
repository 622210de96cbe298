//! Session store: issuance, lookup and revocation of opaque sessions.

use std::sync::Arc;

use tracing::info;

use authhub_core::error::AppError;
use authhub_entity::session::Session;
use authhub_entity::user::User;
use authhub_store::repositories::session::SessionRepository;

use super::token;

/// Issues and revokes sessions backed by the session repository.
#[derive(Debug, Clone)]
pub struct SessionStore {
    repo: Arc<SessionRepository>,
}

impl SessionStore {
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }

    /// Issues a fresh session for a user with newly generated opaque
    /// tokens. A user may hold any number of concurrent sessions.
    pub async fn issue(&self, user: &User) -> Result<Session, AppError> {
        let session = Session::new(&user.uid, token::session_id(), token::refresh_token());
        self.repo.create(&session).await?;
        info!(uid = %user.uid, session_id = %session.session_id, "Session issued");
        Ok(session)
    }

    /// Looks up a session by its opaque session id.
    pub async fn find_by_session_id(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        self.repo.find_by_session_id(session_id).await
    }

    /// Looks up a session by its refresh token.
    pub async fn find_by_refresh_token(&self, refresh_token: &str) -> Result<Option<Session>, AppError> {
        self.repo.find_by_refresh_token(refresh_token).await
    }

    /// Lists all live sessions for a user.
    pub async fn find_all(&self, uid: &str) -> Result<Vec<Session>, AppError> {
        self.repo.find_by_user(uid).await
    }

    /// Revokes a session by id, returning the revoked record.
    ///
    /// Fails with `NotFound` when the session id is unknown, which also
    /// makes concurrent revocation of the same session a single-winner
    /// race.
    pub async fn revoke(&self, session_id: &str) -> Result<Session, AppError> {
        let session = self
            .repo
            .find_by_session_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session '{session_id}' does not exist")))?;
        let deleted = self.repo.delete(session_id).await?;
        if !deleted {
            // Lost the race to a concurrent revoke.
            return Err(AppError::not_found(format!(
                "Session '{session_id}' does not exist"
            )));
        }
        info!(session_id, uid = %session.user_uid, "Session revoked");
        Ok(session)
    }

    /// Revokes every session held by a user, returning how many were
    /// removed. Zero is a valid outcome.
    pub async fn revoke_all(&self, uid: &str) -> Result<u64, AppError> {
        let count = self.repo.delete_by_user(uid).await?;
        info!(uid, count, "All sessions revoked");
        Ok(count)
    }
}
