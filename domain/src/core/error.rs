//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when a value supplied by a caller cannot form a valid domain object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Search term must not be empty")]
    EmptySearchTerm,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
