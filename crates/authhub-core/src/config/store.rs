//! Persistence store configuration.

use serde::{Deserialize, Serialize};

/// Persistence store configuration.
///
/// The store is an opaque collaborator offering atomic single-key
/// operations; only connection parameters live here. The in-memory
/// provider ignores everything but `provider`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider type. Only `"memory"` ships in-tree.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Host of an external store backend.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port of an external store backend.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username for an external store backend.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for an external store backend.
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}
