//! Application error taxonomy
//!
//! Use cases never shape transport responses. They signal one of these
//! kinds and the boundary maps each kind to a fixed status.

use thiserror::Error;
use trivia_domain::DomainError;

/// Errors returned by every use case
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A required field, term or list was not supplied
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An empty page, or an id with no record behind it
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store rejected a write, delete or search
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// An unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        ApplicationError::BadRequest(error.to_string())
    }
}
