//! List Category Questions use case

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, error};
use trivia_domain::{Category, CategoryId, PAGE_SIZE, Page, Question, QuestionFilter, paginate};

/// Input for the ListCategoryQuestions use case
#[derive(Debug, Clone, Copy)]
pub struct ListCategoryQuestionsInput {
    pub category: CategoryId,
    pub page: Page,
}

impl ListCategoryQuestionsInput {
    pub fn new(category: CategoryId, page: Page) -> Self {
        Self { category, page }
    }
}

/// Output of the ListCategoryQuestions use case
#[derive(Debug, Clone)]
pub struct ListCategoryQuestionsOutput {
    pub questions: Vec<Question>,
    /// Number of questions in the category across all pages
    pub total_questions: usize,
    /// The category row, if one exists for the requested id
    pub current_category: Option<Category>,
}

/// Use case for listing one page of a single category's questions
pub struct ListCategoryQuestionsUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> ListCategoryQuestionsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Filter by category, then paginate; an empty page is `NotFound`
    pub async fn execute(
        &self,
        input: ListCategoryQuestionsInput,
    ) -> Result<ListCategoryQuestionsOutput, ApplicationError> {
        let filter = QuestionFilter::new().in_category(input.category);

        let matching = self
            .repository
            .find_questions(&filter)
            .await
            .map_err(|e| internal("list category questions", e))?;

        let questions = paginate(&matching, input.page, PAGE_SIZE);
        if questions.is_empty() {
            return Err(ApplicationError::NotFound(format!(
                "page {} of category {} has no questions",
                input.page.number(),
                input.category
            )));
        }

        let total_questions = self
            .repository
            .count_questions(&filter)
            .await
            .map_err(|e| internal("count category questions", e))?;

        let current_category = self
            .repository
            .find_category(input.category)
            .await
            .map_err(|e| internal("look up category", e))?;

        debug!(
            "Category {} page {}: {} of {} questions",
            input.category,
            input.page.number(),
            questions.len(),
            total_questions
        );

        Ok(ListCategoryQuestionsOutput {
            questions,
            total_questions,
            current_category,
        })
    }
}

fn internal(action: &str, e: impl std::fmt::Display) -> ApplicationError {
    error!("Failed to {}: {}", action, e);
    ApplicationError::Internal(e.to_string())
}
