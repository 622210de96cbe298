//! Credential storage operations wrapping the repository.

use std::sync::Arc;

use authhub_core::error::AppError;
use authhub_entity::credential::Credential;
use authhub_store::repositories::credential::CredentialRepository;

use crate::password::PasswordHasher;

/// Owns creation, verification, and rotation of one user's credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// Credential persistence.
    repo: Arc<CredentialRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl CredentialStore {
    /// Creates a new credential store.
    pub fn new(repo: Arc<CredentialRepository>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    /// Creates and persists a credential for a user from a raw secret.
    ///
    /// The KDF is CPU-bound by design, so it runs on the blocking pool
    /// rather than stalling the async scheduler.
    pub async fn create(&self, uid: &str, secret: &str) -> Result<Credential, AppError> {
        let (hash, salt) = self.run_kdf(secret).await?;
        let credential = Credential::new(uid, hash, salt);
        self.repo.upsert(&credential).await?;
        Ok(credential)
    }

    /// Replaces a user's credential wholesale with one derived from a
    /// new secret. A fresh salt is always generated; the old hash and
    /// salt are discarded, never retained.
    pub async fn rotate(&self, uid: &str, new_secret: &str) -> Result<Credential, AppError> {
        self.create(uid, new_secret).await
    }

    /// Verifies a candidate secret against a stored credential.
    pub async fn verify(
        &self,
        credential: &Credential,
        candidate: &str,
    ) -> Result<bool, AppError> {
        let hasher = self.hasher;
        let candidate = candidate.to_string();
        let salt = credential.salt.clone();
        let expected = credential.password_hash;

        tokio::task::spawn_blocking(move || hasher.verify_password(&candidate, &salt, &expected))
            .await
            .map_err(|e| AppError::internal(format!("KDF task failed: {e}")))?
    }

    /// Finds the credential attached to a user, if any.
    pub async fn find(&self, uid: &str) -> Result<Option<Credential>, AppError> {
        self.repo.find_by_uid(uid).await
    }

    /// Deletes the credential attached to a user.
    pub async fn delete(&self, uid: &str) -> Result<bool, AppError> {
        self.repo.delete_by_uid(uid).await
    }

    async fn run_kdf(&self, secret: &str) -> Result<([u8; 32], Vec<u8>), AppError> {
        let hasher = self.hasher;
        let secret = secret.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&secret))
            .await
            .map_err(|e| AppError::internal(format!("KDF task failed: {e}")))?
    }
}
