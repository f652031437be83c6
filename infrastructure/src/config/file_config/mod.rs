//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section has defaults.

mod logging;
mod server;
mod storage;

pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;
pub use storage::{FileStorageConfig, StorageBackend};

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.bind is not a socket address: {0}")]
    InvalidBindAddress(String),

    #[error("storage.path is required when storage.backend = \"sqlite\"")]
    MissingDatabasePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Repository backend settings
    pub storage: FileStorageConfig,
    /// Log filter and optional file output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.bind_addr()?;

        if self.storage.backend == StorageBackend::Sqlite && self.storage.path.is_none() {
            return Err(ConfigValidationError::MissingDatabasePath);
        }

        Ok(())
    }

    /// Parsed `server.bind`
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigValidationError::InvalidBindAddress(self.server.bind.clone()))
    }
}
