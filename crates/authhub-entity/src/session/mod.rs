//! Session entity.

pub mod model;

pub use model::Session;
