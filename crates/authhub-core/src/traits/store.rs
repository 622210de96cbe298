//! Persistence collaborator trait.
//!
//! The engine treats persistence as an opaque keyed store: atomic
//! single-record get/put/delete plus a "find all rows where field = X"
//! scan for foreign-key lookups. No cross-record transactions are
//! required by this core.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for keyed persistence backends.
///
/// Records are JSON-serialized rows grouped into named tables. Each
/// operation is atomic at the single-record level. Row (de)serialization
/// is the repositories' concern so the trait stays object-safe.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a row by table and key.
    async fn get(&self, table: &str, key: &str) -> AppResult<Option<String>>;

    /// Insert or replace a row.
    async fn put(&self, table: &str, key: &str, value: &str) -> AppResult<()>;

    /// Insert a row only if the key is not already present.
    /// Returns `true` if the row was inserted, `false` on collision.
    async fn put_if_absent(&self, table: &str, key: &str, value: &str) -> AppResult<bool>;

    /// Replace a row only if the key is still present, atomically.
    /// Returns `true` if the row was replaced, `false` if it was gone.
    /// A plain `put` after a lost delete race would re-insert the row.
    async fn update_if_present(&self, table: &str, key: &str, value: &str) -> AppResult<bool>;

    /// Delete a row. Returns `true` if a row existed.
    async fn delete(&self, table: &str, key: &str) -> AppResult<bool>;

    /// Find all rows whose JSON field `field` equals the string `value`.
    async fn find_where(&self, table: &str, field: &str, value: &str) -> AppResult<Vec<String>>;
}
