//! Credential lifecycle.

pub mod store;

pub use store::CredentialStore;
