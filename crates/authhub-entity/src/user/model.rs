//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered identity in the AuthHub system.
///
/// The `uid` is caller-supplied, globally unique, and immutable for the
/// lifetime of the user. Users are created once at registration and never
/// mutated; deleting a user cascades to its credential and all sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque unique identifier.
    pub uid: String,
    /// When the user was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with the registration timestamp set to now.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            created_at: Utc::now(),
        }
    }
}
