//! User directory — identity existence, uniqueness, cascade delete.

use std::sync::Arc;

use tracing::info;

use authhub_core::error::AppError;
use authhub_entity::user::User;
use authhub_store::repositories::credential::CredentialRepository;
use authhub_store::repositories::session::SessionRepository;
use authhub_store::repositories::user::UserRepository;

/// Owns user identity rows and the delete cascade to credentials and
/// sessions.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Arc<UserRepository>,
    credentials: Arc<CredentialRepository>,
    sessions: Arc<SessionRepository>,
}

impl UserDirectory {
    /// Creates a new user directory.
    pub fn new(
        users: Arc<UserRepository>,
        credentials: Arc<CredentialRepository>,
        sessions: Arc<SessionRepository>,
    ) -> Self {
        Self {
            users,
            credentials,
            sessions,
        }
    }

    /// Registers a new user identity.
    ///
    /// The user is created with no credential attached; attaching one is
    /// the orchestrator's job. Fails with `AlreadyExists` on a uid
    /// collision, leaving the existing user untouched.
    pub async fn register(&self, uid: &str) -> Result<User, AppError> {
        let user = User::new(uid);
        let inserted = self.users.create(&user).await?;
        if !inserted {
            return Err(AppError::already_exists(format!(
                "User '{uid}' already exists"
            )));
        }
        info!(uid, "User registered");
        Ok(user)
    }

    /// Finds a user by uid, failing with `NotFound` when absent.
    pub async fn find(&self, uid: &str) -> Result<User, AppError> {
        self.users
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{uid}' does not exist")))
    }

    /// Deletes a user, cascading to its credential and all sessions.
    pub async fn delete(&self, uid: &str) -> Result<(), AppError> {
        // Fail before any partial cascade if the identity is absent.
        self.find(uid).await?;

        let revoked = self.sessions.delete_by_user(uid).await?;
        self.credentials.delete_by_uid(uid).await?;
        self.users.delete(uid).await?;

        info!(uid, revoked_sessions = revoked, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authhub_core::error::ErrorKind;
    use authhub_entity::credential::Credential;
    use authhub_entity::session::Session;
    use authhub_store::memory::MemoryStore;
    use authhub_core::traits::store::KeyValueStore;

    fn make_directory() -> (UserDirectory, Arc<dyn KeyValueStore>) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let directory = UserDirectory::new(
            Arc::new(UserRepository::new(Arc::clone(&store))),
            Arc::new(CredentialRepository::new(Arc::clone(&store))),
            Arc::new(SessionRepository::new(Arc::clone(&store))),
        );
        (directory, store)
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let (directory, _) = make_directory();
        let first = directory.register("alice").await.unwrap();

        let err = directory.register("alice").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);

        // First registration unaffected.
        assert_eq!(directory.find("alice").await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let (directory, _) = make_directory();
        let err = directory.find("ghost").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let (directory, store) = make_directory();
        let credentials = CredentialRepository::new(Arc::clone(&store));
        let sessions = SessionRepository::new(Arc::clone(&store));

        directory.register("alice").await.unwrap();
        credentials
            .upsert(&Credential::new("alice", [0u8; 32], vec![0; 32]))
            .await
            .unwrap();
        sessions.create(&Session::new("alice", "s1", "r1")).await.unwrap();
        sessions.create(&Session::new("alice", "s2", "r2")).await.unwrap();

        directory.delete("alice").await.unwrap();

        assert!(credentials.find_by_uid("alice").await.unwrap().is_none());
        assert!(sessions.find_by_user("alice").await.unwrap().is_empty());
        let err = directory.find("alice").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = directory.delete("alice").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
