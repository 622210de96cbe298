//! # authhub-entity
//!
//! Domain entity models for AuthHub. Every struct in this crate
//! represents a persisted store row. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`.

pub mod credential;
pub mod session;
pub mod user;

pub use credential::Credential;
pub use session::Session;
pub use user::User;
