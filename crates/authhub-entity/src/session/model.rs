//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// One authenticated login.
///
/// Sessions are created on login and removed on logout, bulk
/// termination, or user deletion. A user may hold any number of
/// concurrent sessions (multi-device login). The `refresh_token` lives
/// in its own namespace, never overlapping `session_id`, and is never
/// reused after revocation within a process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque unique session identifier (primary identity).
    pub session_id: String,
    /// Opaque unique secret used to obtain new signed tokens.
    pub refresh_token: String,
    /// Back-reference to the owning user.
    pub user_uid: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp. Advisory telemetry, updated best-effort.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Create a session record for a user from freshly minted tokens.
    pub fn new(
        user_uid: impl Into<String>,
        session_id: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            refresh_token: refresh_token.into(),
            user_uid: user_uid.into(),
            created_at: now,
            last_activity: now,
        }
    }

    /// Check whether this session belongs to the given user.
    pub fn belongs_to(&self, user: &User) -> bool {
        self.user_uid == user.uid
    }
}
