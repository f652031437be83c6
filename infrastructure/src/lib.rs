//! Infrastructure layer for trivia-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, seed fixtures, and configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileServerConfig,
    FileStorageConfig, StorageBackend,
};
pub use storage::{
    FixtureQuestion, Fixtures, InMemoryQuestionRepository, SeedReport, SqliteQuestionRepository,
    StorageError,
};
