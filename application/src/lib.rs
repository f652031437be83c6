//! Application layer for trivia-api
//!
//! This crate contains use cases, port definitions, and the application
//! error taxonomy. It depends only on the domain layer.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::ApplicationError;
pub use ports::question_repository::{QuestionRepository, RepositoryError};
pub use use_cases::create_question::CreateQuestionUseCase;
pub use use_cases::delete_question::DeleteQuestionUseCase;
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::list_category_questions::{
    ListCategoryQuestionsInput, ListCategoryQuestionsOutput, ListCategoryQuestionsUseCase,
};
pub use use_cases::list_questions::{ListQuestionsInput, ListQuestionsOutput, ListQuestionsUseCase};
pub use use_cases::next_quiz_question::{NextQuizQuestionInput, NextQuizQuestionUseCase};
pub use use_cases::search_questions::{SearchQuestionsOutput, SearchQuestionsUseCase};
