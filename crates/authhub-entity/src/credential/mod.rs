//! Credential entity.

pub mod model;

pub use model::{Credential, HASH_LEN};
