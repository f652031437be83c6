//! Search Questions use case

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, warn};
use trivia_domain::{Question, QuestionFilter, SearchTerm};

/// Output of the SearchQuestions use case
///
/// Search results are never paginated.
#[derive(Debug, Clone)]
pub struct SearchQuestionsOutput {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Use case for case-insensitive substring search over question text
pub struct SearchQuestionsUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> SearchQuestionsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every question matching `term`; store failures are `Unprocessable`
    pub async fn execute(&self, term: SearchTerm) -> Result<SearchQuestionsOutput, ApplicationError> {
        let filter = QuestionFilter::new().matching(term);

        let questions = self.repository.find_questions(&filter).await.map_err(|e| {
            warn!("Search failed: {}", e);
            ApplicationError::Unprocessable(e.to_string())
        })?;

        debug!("Search matched {} questions", questions.len());

        Ok(SearchQuestionsOutput {
            total_questions: questions.len(),
            questions,
        })
    }
}
