//! Session repository implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_core::traits::store::KeyValueStore;
use authhub_entity::session::Session;

/// Table name for session rows, keyed by session_id.
const TABLE: &str = "sessions";

/// Repository for session rows.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Insert a new session row.
    ///
    /// The session_id carries 128 bits of entropy, so a key collision
    /// indicates a broken random source rather than normal operation.
    pub async fn create(&self, session: &Session) -> AppResult<()> {
        let row = serde_json::to_string(session)?;
        let inserted = self
            .store
            .put_if_absent(TABLE, &session.session_id, &row)
            .await?;
        if !inserted {
            return Err(AppError::internal("Session id collision on insert"));
        }
        Ok(())
    }

    /// Find a session by its id.
    pub async fn find_by_session_id(&self, session_id: &str) -> AppResult<Option<Session>> {
        match self.store.get(TABLE, session_id).await? {
            Some(row) => Ok(Some(serde_json::from_str(&row)?)),
            None => Ok(None),
        }
    }

    /// Find a session by its refresh token.
    pub async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Session>> {
        let rows = self
            .store
            .find_where(TABLE, "refresh_token", refresh_token)
            .await?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(serde_json::from_str(&row)?)),
            None => Ok(None),
        }
    }

    /// Find all sessions owned by a user. Order is not significant.
    pub async fn find_by_user(&self, uid: &str) -> AppResult<Vec<Session>> {
        let rows = self.store.find_where(TABLE, "user_uid", uid).await?;
        let mut sessions = Vec::with_capacity(rows.len());
        for row in rows {
            sessions.push(serde_json::from_str(&row)?);
        }
        Ok(sessions)
    }

    /// Delete a session row. Returns `true` if a row existed.
    pub async fn delete(&self, session_id: &str) -> AppResult<bool> {
        self.store.delete(TABLE, session_id).await
    }

    /// Delete every session owned by a user, returning the count.
    ///
    /// Zero sessions is success, not an error.
    pub async fn delete_by_user(&self, uid: &str) -> AppResult<u64> {
        let sessions = self.find_by_user(uid).await?;
        let mut deleted = 0u64;
        for session in &sessions {
            if self.store.delete(TABLE, &session.session_id).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    /// Update a session's `last_activity` timestamp.
    ///
    /// The write is conditional on the row still existing, so a session
    /// revoked between lookup and write stays revoked instead of being
    /// re-inserted with its old refresh token.
    pub async fn update_last_activity(
        &self,
        session_id: &str,
        at: DateTime<Utc>,
    ) -> AppResult<()> {
        let Some(mut session) = self.find_by_session_id(session_id).await? else {
            warn!(session_id, "Activity update for unknown session");
            return Ok(());
        };
        session.last_activity = at;
        let row = serde_json::to_string(&session)?;
        if !self.store.update_if_present(TABLE, session_id, &row).await? {
            warn!(session_id, "Session revoked during activity update");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn make_repo() -> SessionRepository {
        SessionRepository::new(Arc::new(MemoryStore::new()))
    }

    /// Store that, when armed, deletes a row right after it is read —
    /// the narrowest interleaving of a revocation racing a touch.
    #[derive(Debug, Default)]
    struct RevokeAfterReadStore {
        inner: MemoryStore,
        armed: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for RevokeAfterReadStore {
        async fn get(&self, table: &str, key: &str) -> AppResult<Option<String>> {
            let row = self.inner.get(table, key).await?;
            if row.is_some() && self.armed.swap(false, Ordering::SeqCst) {
                self.inner.delete(table, key).await?;
            }
            Ok(row)
        }

        async fn put(&self, table: &str, key: &str, value: &str) -> AppResult<()> {
            self.inner.put(table, key, value).await
        }

        async fn put_if_absent(&self, table: &str, key: &str, value: &str) -> AppResult<bool> {
            self.inner.put_if_absent(table, key, value).await
        }

        async fn update_if_present(&self, table: &str, key: &str, value: &str) -> AppResult<bool> {
            self.inner.update_if_present(table, key, value).await
        }

        async fn delete(&self, table: &str, key: &str) -> AppResult<bool> {
            self.inner.delete(table, key).await
        }

        async fn find_where(&self, table: &str, field: &str, value: &str) -> AppResult<Vec<String>> {
            self.inner.find_where(table, field, value).await
        }
    }

    #[tokio::test]
    async fn test_create_and_lookups() {
        let repo = make_repo();
        let session = Session::new("alice", "sid-1", "rt-1");
        repo.create(&session).await.unwrap();

        assert_eq!(
            repo.find_by_session_id("sid-1").await.unwrap().unwrap(),
            session
        );
        assert_eq!(
            repo.find_by_refresh_token("rt-1").await.unwrap().unwrap(),
            session
        );
        assert!(repo.find_by_refresh_token("rt-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_user_and_bulk_delete() {
        let repo = make_repo();
        repo.create(&Session::new("alice", "s1", "r1")).await.unwrap();
        repo.create(&Session::new("alice", "s2", "r2")).await.unwrap();
        repo.create(&Session::new("bob", "s3", "r3")).await.unwrap();

        assert_eq!(repo.find_by_user("alice").await.unwrap().len(), 2);
        assert_eq!(repo.delete_by_user("alice").await.unwrap(), 2);
        assert_eq!(repo.delete_by_user("alice").await.unwrap(), 0);
        assert_eq!(repo.find_by_user("bob").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_last_activity() {
        let repo = make_repo();
        let session = Session::new("alice", "s1", "r1");
        repo.create(&session).await.unwrap();

        let later = session.last_activity + chrono::Duration::seconds(42);
        repo.update_last_activity("s1", later).await.unwrap();

        let found = repo.find_by_session_id("s1").await.unwrap().unwrap();
        assert_eq!(found.last_activity, later);

        // Unknown session is swallowed, not an error.
        repo.update_last_activity("missing", later).await.unwrap();
    }

    #[tokio::test]
    async fn test_activity_update_cannot_resurrect_revoked_session() {
        let store = Arc::new(RevokeAfterReadStore::default());
        let repo = SessionRepository::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let session = Session::new("alice", "s1", "r1");
        repo.create(&session).await.unwrap();

        // The session is revoked between the touch's read and its write.
        store.armed.store(true, Ordering::SeqCst);
        repo.update_last_activity("s1", Utc::now()).await.unwrap();

        assert!(repo.find_by_session_id("s1").await.unwrap().is_none());
        assert!(repo.find_by_refresh_token("r1").await.unwrap().is_none());
    }
}
