//! # authhub-cache
//!
//! Cache provider implementations for AuthHub. The engine only consumes
//! the opaque `CacheProvider` trait; this crate supplies:
//!
//! - **memory**: in-process cache using [moka](https://crates.io/crates/moka)
//!   with per-entry TTL
//! - `keys`: centralized cache key builders
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
pub mod memory;
pub mod provider;

pub use provider::CacheManager;
