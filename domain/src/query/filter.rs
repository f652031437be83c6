//! Category and search predicates over questions

use crate::core::category::CategoryId;
use crate::core::error::DomainError;
use crate::core::question::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// A non-empty, case-insensitive search term (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Build a term from an optional raw value
    ///
    /// A missing or empty term is a caller error, never "match everything".
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(raw) if !raw.is_empty() => Ok(Self {
                raw: raw.to_string(),
                folded: raw.to_lowercase(),
            }),
            _ => Err(DomainError::EmptySearchTerm),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Unanchored, case-insensitive substring match
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn filed_under(question: &Question, category: CategoryId) -> bool {
    question.category == category
}

/// Keep only questions filed under `category`
pub fn by_category(questions: &[Question], category: CategoryId) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| filed_under(q, category))
        .cloned()
        .collect()
}

/// Size of [`by_category`] without building it
pub fn count_in_category(questions: &[Question], category: CategoryId) -> usize {
    questions.iter().filter(|q| filed_under(q, category)).count()
}

/// Keep only questions whose text contains `term`
pub fn search(questions: &[Question], term: &SearchTerm) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| term.matches(&q.question))
        .cloned()
        .collect()
}

/// Conjunction of the predicates a repository query may carry
///
/// Storage adapters may evaluate parts of this in their own query
/// language, but the result must equal filtering with [`QuestionFilter::matches`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<CategoryId>,
    pub search: Option<SearchTerm>,
    pub exclude: Vec<QuestionId>,
}

impl QuestionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matching(mut self, term: SearchTerm) -> Self {
        self.search = Some(term);
        self
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.exclude.extend(ids);
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        if let Some(category) = self.category
            && !filed_under(question, category)
        {
            return false;
        }
        if let Some(term) = &self.search
            && !term.matches(&question.question)
        {
            return false;
        }
        !self.exclude.contains(&question.id)
    }

    /// Category first, then search, then exclusion
    pub fn apply(&self, questions: &[Question]) -> Vec<Question> {
        let mut selected = match self.category {
            Some(category) => by_category(questions, category),
            None => questions.to_vec(),
        };
        if let Some(term) = &self.search {
            selected = search(&selected, term);
        }
        selected.retain(|q| !self.exclude.contains(&q.id));
        selected
    }

    /// Same as `apply(questions).len()`
    pub fn count(&self, questions: &[Question]) -> usize {
        match self.category {
            Some(category) if self.search.is_none() && self.exclude.is_empty() => {
                count_in_category(questions, category)
            }
            _ => self.apply(questions).len(),
        }
    }
}
