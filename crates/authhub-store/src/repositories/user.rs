//! User repository implementation.

use std::sync::Arc;

use authhub_core::result::AppResult;
use authhub_core::traits::store::KeyValueStore;
use authhub_entity::user::User;

/// Table name for user rows, keyed by uid.
const TABLE: &str = "users";

/// Repository for user rows.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Insert a user if the uid is free. Returns `false` on collision.
    pub async fn create(&self, user: &User) -> AppResult<bool> {
        let row = serde_json::to_string(user)?;
        self.store.put_if_absent(TABLE, &user.uid, &row).await
    }

    /// Find a user by uid.
    pub async fn find_by_uid(&self, uid: &str) -> AppResult<Option<User>> {
        match self.store.get(TABLE, uid).await? {
            Some(row) => Ok(Some(serde_json::from_str(&row)?)),
            None => Ok(None),
        }
    }

    /// Delete a user row. Returns `true` if a row existed.
    pub async fn delete(&self, uid: &str) -> AppResult<bool> {
        self.store.delete(TABLE, uid).await
    }
}
