//! Question repository port
//!
//! Defines the interface to the record store holding questions and
//! categories.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId};

/// Errors that can occur during repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Question {0} not found")]
    NotFound(QuestionId),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Store of questions and categories
///
/// Listing operations return records in ascending id order, which is
/// creation order. Implementations (adapters) live in the infrastructure
/// layer. Filters may be evaluated inside the store or in memory, but the
/// outcome must equal [`QuestionFilter::matches`].
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions
    async fn list_questions(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Questions satisfying `filter`
    async fn find_questions(&self, filter: &QuestionFilter)
    -> Result<Vec<Question>, RepositoryError>;

    /// Number of questions satisfying `filter`
    async fn count_questions(&self, filter: &QuestionFilter) -> Result<usize, RepositoryError>;

    /// A single question by id
    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// Store a new question and return its assigned id
    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError>;

    /// Permanently remove a question
    ///
    /// Removing an id that does not exist is [`RepositoryError::NotFound`].
    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError>;

    /// All categories
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError>;

    /// A single category by id
    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// Store a category under its own id
    ///
    /// Categories are not writable over HTTP; this exists for seeding.
    async fn insert_category(&self, category: Category) -> Result<(), RepositoryError>;
}
