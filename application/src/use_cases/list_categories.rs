//! List Categories use case

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, error};
use trivia_domain::Category;

/// Use case for listing every category
pub struct ListCategoriesUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> ListCategoriesUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All categories in id order; `NotFound` when there are none
    pub async fn execute(&self) -> Result<Vec<Category>, ApplicationError> {
        let categories = self.repository.list_categories().await.map_err(|e| {
            error!("Failed to list categories: {}", e);
            ApplicationError::Internal(e.to_string())
        })?;

        if categories.is_empty() {
            return Err(ApplicationError::NotFound("no categories".to_string()));
        }

        debug!("Listed {} categories", categories.len());
        Ok(categories)
    }
}
