//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use authhub_core::config::store::StoreConfig;
use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_core::traits::store::KeyValueStore;

use crate::memory::MemoryStore;

/// Store manager that selects the persistence provider at construction
/// time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            "memory" => {
                info!("Initializing in-memory store provider");
                Arc::new(MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn KeyValueStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a shared handle to the inner provider.
    pub fn provider(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authhub_core::error::ErrorKind;

    #[tokio::test]
    async fn test_memory_provider_dispatch() {
        let manager = StoreManager::new(&StoreConfig::default()).unwrap();
        let store = manager.provider();
        store.put("t", "k", "v").await.unwrap();
        assert_eq!(store.get("t", "k").await.unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let config = StoreConfig {
            provider: "cassandra".into(),
            ..StoreConfig::default()
        };
        let err = StoreManager::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
