//! List Questions use case
//!
//! Pages through the whole question table. The full table is loaded and
//! then sliced, so `total_questions` always reflects every stored question.

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, error};
use trivia_domain::{Category, PAGE_SIZE, Page, Question, page_count, paginate};

/// Input for the ListQuestions use case
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuestionsInput {
    pub page: Page,
}

impl ListQuestionsInput {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

/// Output of the ListQuestions use case
#[derive(Debug, Clone)]
pub struct ListQuestionsOutput {
    /// Questions on the requested page
    pub questions: Vec<Question>,
    /// Number of stored questions across all pages
    pub total_questions: usize,
    /// Every category, for the client's category menu
    pub categories: Vec<Category>,
}

/// Use case for listing one page of all questions
pub struct ListQuestionsUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> ListQuestionsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the use case; an empty page is `NotFound`
    pub async fn execute(
        &self,
        input: ListQuestionsInput,
    ) -> Result<ListQuestionsOutput, ApplicationError> {
        let all = self.repository.list_questions().await.map_err(|e| {
            error!("Failed to list questions: {}", e);
            ApplicationError::Internal(e.to_string())
        })?;

        let questions = paginate(&all, input.page, PAGE_SIZE);
        if questions.is_empty() {
            return Err(ApplicationError::NotFound(format!(
                "page {} has no questions",
                input.page.number()
            )));
        }

        let categories = self.repository.list_categories().await.map_err(|e| {
            error!("Failed to list categories: {}", e);
            ApplicationError::Internal(e.to_string())
        })?;

        debug!(
            "Page {} of {} holds {} of {} questions",
            input.page.number(),
            page_count(all.len(), PAGE_SIZE),
            questions.len(),
            all.len()
        );

        Ok(ListQuestionsOutput {
            questions,
            total_questions: all.len(),
            categories,
        })
    }
}
