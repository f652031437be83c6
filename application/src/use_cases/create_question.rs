//! Create Question use case

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{NewQuestion, QuestionId};

/// Use case for storing a new question
pub struct CreateQuestionUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> CreateQuestionUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Insert the question; any store failure is `Unprocessable`
    pub async fn execute(&self, question: NewQuestion) -> Result<QuestionId, ApplicationError> {
        let category = question.category();
        match self.repository.insert_question(question).await {
            Ok(id) => {
                info!("Created question {} in category {}", id, category);
                Ok(id)
            }
            Err(e) => {
                warn!("Insert rejected: {}", e);
                Err(ApplicationError::Unprocessable(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::StubRepository;

    fn new_question() -> NewQuestion {
        NewQuestion::try_new(
            Some("Q".to_string()),
            Some("A".to_string()),
            Some(1),
            Some(1),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_created_question_is_stored() {
        let repo = Arc::new(StubRepository::new());
        let id = CreateQuestionUseCase::new(repo.clone())
            .execute(new_question())
            .await
            .unwrap();

        let stored = repo.find_question(id).await.unwrap().unwrap();
        assert_eq!(stored.question, "Q");
        assert_eq!(stored.answer, "A");
    }

    #[tokio::test]
    async fn test_store_failure_is_unprocessable() {
        let repo = Arc::new(StubRepository::new().failing_writes());
        let result = CreateQuestionUseCase::new(repo).execute(new_question()).await;
        assert!(matches!(result, Err(ApplicationError::Unprocessable(_))));
    }
}
