//! Next Quiz Question use case
//!
//! The caller owns the quiz session: every request carries the ids it has
//! already been served, and nothing is remembered between requests.

use crate::error::ApplicationError;
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, error};
use trivia_domain::{CategoryId, DomainError, Question, QuestionId, QuizSelector};

/// Input for the NextQuizQuestion use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQuizQuestionInput {
    pub previous: Vec<QuestionId>,
    pub category: Option<CategoryId>,
}

impl NextQuizQuestionInput {
    /// An absent previous-question list is a caller error; an empty one
    /// starts a new quiz
    pub fn try_new(
        previous: Option<Vec<QuestionId>>,
        category: Option<CategoryId>,
    ) -> Result<Self, DomainError> {
        let previous = previous.ok_or(DomainError::MissingField("previous_questions"))?;
        Ok(Self { previous, category })
    }
}

/// Use case for drawing the next quiz question
pub struct NextQuizQuestionUseCase<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> NextQuizQuestionUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// A random unasked question, or `None` when the quiz is complete
    pub async fn execute(
        &self,
        input: NextQuizQuestionInput,
    ) -> Result<Option<Question>, ApplicationError> {
        let questions = self.repository.list_questions().await.map_err(|e| {
            error!("Failed to load quiz questions: {}", e);
            ApplicationError::Internal(e.to_string())
        })?;

        let next = QuizSelector::next_question(&questions, &input.previous, input.category);

        match &next {
            Some(question) => debug!(
                "Quiz drew question {} after {} previous",
                question.id,
                input.previous.len()
            ),
            None => debug!("Quiz complete after {} questions", input.previous.len()),
        }

        Ok(next)
    }
}
