//! # authhub-auth
//!
//! The credential & session lifecycle engine for AuthHub.
//!
//! ## Modules
//!
//! - `password` — scrypt password hashing with per-credential salts
//! - `credential` — credential creation, verification, and rotation
//! - `directory` — user identity registration, lookup, cascade delete
//! - `session` — session issuance, revocation, and activity recording
//! - `jwt` — signed-token minting, verification, the signing secret, and
//!   the verification cache
//! - `manager` — the orchestrator composing the above into the
//!   register/login/logout/refresh/verify/change-password use cases

pub mod credential;
pub mod directory;
pub mod jwt;
pub mod manager;
pub mod password;
pub mod session;

pub use credential::CredentialStore;
pub use directory::UserDirectory;
pub use jwt::{Claims, ClaimsCache, JwtDecoder, JwtEncoder, MintedToken};
pub use manager::{AuthManager, LoginResult};
pub use password::PasswordHasher;
pub use session::{ActivityRecorder, SessionStore};
