//! Storage adapters implementing [`QuestionRepository`](trivia_application::QuestionRepository).
//!
//! - [`InMemoryQuestionRepository`]: process-local tables, lost on exit
//! - [`SqliteQuestionRepository`]: a SQLite database file
//! - [`Fixtures`]: seed data for a fresh store

mod fixtures;
mod memory;
mod sqlite;

#[cfg(test)]
pub(crate) mod conformance;

pub use fixtures::{FixtureQuestion, Fixtures, SeedReport};
pub use memory::InMemoryQuestionRepository;
pub use sqlite::SqliteQuestionRepository;

use std::path::PathBuf;
use thiserror::Error;
use trivia_application::RepositoryError;
use trivia_domain::DomainError;

/// Errors raised while opening or seeding a store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to prepare schema: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("Failed to read fixtures {}: {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixtures {}: {source}", path.display())]
    FixtureFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixture question #{index} is incomplete: {source}")]
    FixtureQuestion {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("Seeding failed: {0}")]
    Seed(#[from] RepositoryError),
}
