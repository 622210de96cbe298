//! Credential repository implementation.

use std::sync::Arc;

use authhub_core::result::AppResult;
use authhub_core::traits::store::KeyValueStore;
use authhub_entity::credential::Credential;

/// Table name for credential rows, keyed by the owning user's uid.
const TABLE: &str = "credentials";

/// Repository for credential rows (one per user).
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialRepository {
    /// Create a new credential repository.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Insert or replace the credential for a user.
    ///
    /// Replacement is wholesale: rotation stores a fresh hash and salt,
    /// and the old values are discarded, never retained.
    pub async fn upsert(&self, credential: &Credential) -> AppResult<()> {
        let row = serde_json::to_string(credential)?;
        self.store.put(TABLE, &credential.user_uid, &row).await
    }

    /// Find the credential for a user.
    pub async fn find_by_uid(&self, uid: &str) -> AppResult<Option<Credential>> {
        match self.store.get(TABLE, uid).await? {
            Some(row) => Ok(Some(serde_json::from_str(&row)?)),
            None => Ok(None),
        }
    }

    /// Delete the credential for a user. Returns `true` if one existed.
    pub async fn delete_by_uid(&self, uid: &str) -> AppResult<bool> {
        self.store.delete(TABLE, uid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use authhub_entity::credential::HASH_LEN;

    #[tokio::test]
    async fn test_upsert_replaces_wholesale() {
        let repo = CredentialRepository::new(Arc::new(MemoryStore::new()));

        repo.upsert(&Credential::new("alice", [1u8; HASH_LEN], vec![1; 32]))
            .await
            .unwrap();
        repo.upsert(&Credential::new("alice", [2u8; HASH_LEN], vec![2; 32]))
            .await
            .unwrap();

        let found = repo.find_by_uid("alice").await.unwrap().unwrap();
        assert_eq!(found.password_hash, [2u8; HASH_LEN]);
        assert_eq!(found.salt, vec![2; 32]);

        assert!(repo.delete_by_uid("alice").await.unwrap());
        assert!(repo.find_by_uid("alice").await.unwrap().is_none());
    }
}
