//! Typed repositories over the opaque keyed store.

pub mod credential;
pub mod session;
pub mod user;

pub use credential::CredentialRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
