//! Question entity and its validated insert form

use super::category::CategoryId;
use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored trivia question (Entity)
///
/// Serializes as `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    /// Opaque to the core; stored and returned as given
    pub difficulty: i64,
}

impl Question {
    /// Attach a storage-assigned id to a validated insert form
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// The caller-supplied fields of a question before storage assigns an id
///
/// Every field must be present: text fields non-empty and integer
/// fields non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i64,
}

impl NewQuestion {
    /// Validate presence of every field
    pub fn try_new(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<i64>,
        category: Option<i64>,
    ) -> Result<Self, DomainError> {
        let question = question
            .filter(|q| !q.is_empty())
            .ok_or(DomainError::MissingField("question"))?;
        let answer = answer
            .filter(|a| !a.is_empty())
            .ok_or(DomainError::MissingField("answer"))?;
        let difficulty = difficulty
            .filter(|d| *d != 0)
            .ok_or(DomainError::MissingField("difficulty"))?;
        let category = category
            .filter(|c| *c != 0)
            .map(CategoryId::new)
            .ok_or(DomainError::MissingField("category"))?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }
}
