//! Credential entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// Length of the derived password hash in bytes.
pub const HASH_LEN: usize = 32;

/// A user's stored secret: salted KDF output plus its salt.
///
/// Owned 1:1 by a [`User`] through the `user_uid` back-reference. The
/// salt is regenerated on every password change; the hash is never
/// stored or compared without its paired salt. Replaced wholesale on
/// rotation, deleted with the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    /// Back-reference to the owning user.
    pub user_uid: String,
    /// KDF output, fixed length.
    #[serde(with = "hex::serde")]
    pub password_hash: [u8; HASH_LEN],
    /// Per-credential random salt.
    #[serde(with = "hex::serde")]
    pub salt: Vec<u8>,
    /// When this credential was created (or last rotated).
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential record for a user from freshly derived material.
    pub fn new(user_uid: impl Into<String>, password_hash: [u8; HASH_LEN], salt: Vec<u8>) -> Self {
        Self {
            user_uid: user_uid.into(),
            password_hash,
            salt,
            created_at: Utc::now(),
        }
    }

    /// Check whether this credential belongs to the given user.
    pub fn belongs_to(&self, user: &User) -> bool {
        self.user_uid == user.uid
    }
}
