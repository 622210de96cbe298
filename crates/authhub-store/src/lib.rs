//! # authhub-store
//!
//! Persistence for AuthHub. The engine sees an opaque keyed store
//! (see `authhub_core::traits::KeyValueStore`); this crate provides the
//! in-memory implementation plus the typed repositories built on top of
//! it:
//!
//! - `memory` — dashmap-backed store of JSON rows
//! - `provider` — provider selection from configuration
//! - `repositories` — `UserRepository`, `CredentialRepository`,
//!   `SessionRepository`

pub mod memory;
pub mod provider;
pub mod repositories;

pub use memory::MemoryStore;
pub use provider::StoreManager;
