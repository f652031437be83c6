//! Delete Question use case
//!
//! Looks the question up first so that an unknown id is `NotFound`. A
//! failure of the delete itself, whatever its cause, is `Unprocessable`.

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{error, info, warn};
use trivia_domain::QuestionId;

/// Use case for permanently deleting a question
pub struct DeleteQuestionUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> DeleteQuestionUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Delete the question and echo its id
    pub async fn execute(&self, id: QuestionId) -> Result<QuestionId, ApplicationError> {
        let existing = self.repository.find_question(id).await.map_err(|e| {
            error!("Failed to look up question {}: {}", id, e);
            ApplicationError::Unprocessable(e.to_string())
        })?;

        if existing.is_none() {
            return Err(ApplicationError::NotFound(format!("question {id}")));
        }

        self.repository.delete_question(id).await.map_err(|e| {
            warn!("Delete of question {} failed: {}", id, e);
            ApplicationError::Unprocessable(e.to_string())
        })?;

        info!("Deleted question {}", id);
        Ok(id)
    }
}
