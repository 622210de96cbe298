//! # authhub-core
//!
//! Core crate for AuthHub. Contains the unified error system, result
//! alias, configuration schemas, logging setup, and the trait seams for
//! the persistence and cache collaborators.
//!
//! This crate has **no** internal dependencies on other AuthHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
