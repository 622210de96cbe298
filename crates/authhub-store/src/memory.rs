//! In-memory keyed store implementation using dashmap.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use authhub_core::result::AppResult;
use authhub_core::traits::store::KeyValueStore;

/// In-memory store of JSON rows grouped into named tables.
///
/// Every operation is atomic at the single-record level, which is all
/// the engine requires of its persistence collaborator.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// table name -> (key -> JSON row)
    tables: DashMap<String, DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: DashMap::new(),
        }
    }

    fn table(&self, name: &str) -> dashmap::mapref::one::Ref<'_, String, DashMap<String, String>> {
        self.tables.entry(name.to_string()).or_default().downgrade()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, table: &str, key: &str) -> AppResult<Option<String>> {
        Ok(self.table(table).get(key).map(|row| row.clone()))
    }

    async fn put(&self, table: &str, key: &str, value: &str) -> AppResult<()> {
        self.table(table).insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn put_if_absent(&self, table: &str, key: &str, value: &str) -> AppResult<bool> {
        let table = self.table(table);
        match table.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(true)
            }
        }
    }

    async fn update_if_present(&self, table: &str, key: &str, value: &str) -> AppResult<bool> {
        let table = self.table(table);
        match table.entry(key.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(value.to_string());
                Ok(true)
            }
            Entry::Vacant(_) => Ok(false),
        }
    }

    async fn delete(&self, table: &str, key: &str) -> AppResult<bool> {
        let removed = self.table(table).remove(key).is_some();
        Ok(removed)
    }

    async fn find_where(&self, table: &str, field: &str, value: &str) -> AppResult<Vec<String>> {
        let table_ref = self.table(table);
        let mut rows = Vec::new();

        for entry in table_ref.iter() {
            let parsed: serde_json::Value = match serde_json::from_str(entry.value()) {
                Ok(v) => v,
                Err(e) => {
                    debug!(table, key = %entry.key(), error = %e, "Skipping unparseable row");
                    continue;
                }
            };
            if parsed.get(field).and_then(|v| v.as_str()) == Some(value) {
                rows.push(entry.value().clone());
            }
        }

        Ok(rows)
    }
}
