//! Trait seams for the external collaborators of the engine.

pub mod cache;
pub mod store;

pub use cache::CacheProvider;
pub use store::KeyValueStore;
