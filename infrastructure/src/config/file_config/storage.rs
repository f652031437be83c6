//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which repository adapter backs the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local tables, lost on exit
    #[default]
    Memory,
    /// A SQLite database file
    Sqlite,
}

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: StorageBackend,
    /// Database file for the `sqlite` backend
    pub path: Option<PathBuf>,
    /// JSON fixture file applied at startup
    pub fixtures: Option<PathBuf>,
}
