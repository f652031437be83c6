//! Request and response bodies
//!
//! Request bodies arrive loosely typed. Each endpoint decodes into its own
//! struct of optional fields and checks presence before building the
//! domain input. JSON keys here are part of the public contract.

use crate::http::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trivia_domain::{
    Category, CategoryId, DomainError, NewQuestion, Question, QuestionId, SearchTerm,
};
use trivia_application::NextQuizQuestionInput;

/// An integer sent either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    /// The integer value, or `None` for non-numeric text
    pub fn value(&self) -> Option<i64> {
        match self {
            LooseInt::Number(n) => Some(*n),
            LooseInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `?page=N`; kept as text so a non-numeric value falls back to page 1
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Body of `POST /questions`
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

impl CreateQuestionRequest {
    pub fn into_new_question(self) -> Result<NewQuestion, DomainError> {
        NewQuestion::try_new(
            self.question,
            self.answer,
            self.difficulty.as_ref().and_then(LooseInt::value),
            self.category.as_ref().and_then(LooseInt::value),
        )
    }
}

/// Body of `POST /questions/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    pub fn into_term(self) -> Result<SearchTerm, DomainError> {
        SearchTerm::parse(self.search_term.as_deref())
    }
}

/// `quiz_category` inside a quiz request; only the id selects the scope
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    pub id: Option<LooseInt>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<LooseInt>>,
}

impl QuizRequest {
    pub fn into_input(self) -> Result<NextQuizQuestionInput, ApiError> {
        let previous = self
            .previous_questions
            .map(|ids| {
                ids.iter()
                    .map(|id| id.value().map(QuestionId::new))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(ApiError::BadRequest)
            })
            .transpose()?;

        let category = self
            .quiz_category
            .and_then(|c| c.id)
            .and_then(|id| id.value())
            .map(CategoryId::new);

        Ok(NextQuizQuestionInput::try_new(previous, category)?)
    }
}

/// `{id: type}` with ids in ascending order
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id.value(), c.kind.clone()))
        .collect()
}

/// Body of `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
}

/// Body of `GET /questions`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    /// Labels of every category
    pub current_category: Vec<String>,
}

/// Body of `GET /categories/{id}/questions` and `POST /questions/search`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Body of `POST /questions`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

/// Body of `DELETE /questions/{id}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// Body of `POST /quizzes`
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
