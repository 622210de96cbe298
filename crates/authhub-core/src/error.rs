//! Unified application error types for AuthHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Every failure kind the engine can
//! surface to its embedding layer is a distinct [`ErrorKind`] variant so
//! callers can map them 1:1 to transport-level responses.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested identity (user or session) was not found.
    NotFound,
    /// The identity already exists (registration collision).
    AlreadyExists,
    /// The supplied secret does not match the stored credential.
    IncorrectCredentials,
    /// No session exists for the supplied refresh token.
    InvalidRefreshToken,
    /// The signed token's expiry has passed.
    ExpiredSignature,
    /// The signed token's signature does not match.
    InvalidSignature,
    /// The signed token is structurally malformed.
    MalformedToken,
    /// A persistence-store error occurred.
    Store,
    /// A cache error occurred.
    Cache,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::AlreadyExists => write!(f, "ALREADY_EXISTS"),
            Self::IncorrectCredentials => write!(f, "INCORRECT_CREDENTIALS"),
            Self::InvalidRefreshToken => write!(f, "INVALID_REFRESH_TOKEN"),
            Self::ExpiredSignature => write!(f, "EXPIRED_SIGNATURE"),
            Self::InvalidSignature => write!(f, "INVALID_SIGNATURE"),
            Self::MalformedToken => write!(f, "MALFORMED_TOKEN"),
            Self::Store => write!(f, "STORE"),
            Self::Cache => write!(f, "CACHE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout AuthHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. Domain failures (wrong password, expired
/// token, ...) are expected, recoverable conditions; none terminate the
/// service.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an already-exists error.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    /// Create an incorrect-credentials error (login call site).
    pub fn incorrect_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncorrectCredentials, message)
    }

    /// Create a wrong-password error (password-change call site).
    ///
    /// Same underlying condition as [`AppError::incorrect_credentials`];
    /// both names are kept for their two call sites.
    pub fn wrong_password(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncorrectCredentials, message)
    }

    /// Create an invalid-refresh-token error.
    pub fn invalid_refresh_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRefreshToken, message)
    }

    /// Create an expired-signature error.
    pub fn expired_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpiredSignature, message)
    }

    /// Create an invalid-signature error.
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSignature, message)
    }

    /// Create a malformed-token error.
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken, message)
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    /// Create a cache error.
    pub fn cache(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cache, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_are_distinct() {
        let kinds = [
            ErrorKind::NotFound,
            ErrorKind::AlreadyExists,
            ErrorKind::IncorrectCredentials,
            ErrorKind::InvalidRefreshToken,
            ErrorKind::ExpiredSignature,
            ErrorKind::InvalidSignature,
            ErrorKind::MalformedToken,
        ];
        let codes: std::collections::HashSet<String> =
            kinds.iter().map(|k| k.to_string()).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn wrong_password_is_incorrect_credentials() {
        assert_eq!(
            AppError::wrong_password("old password does not match").kind,
            AppError::incorrect_credentials("bad secret").kind,
        );
    }
}
