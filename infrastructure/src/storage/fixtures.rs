//! Seed data for an empty store
//!
//! Categories are read-only over HTTP, so a fresh store gets them from a
//! fixture file or, failing that, the standard six.

use super::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use trivia_application::QuestionRepository;
use trivia_domain::{Category, CategoryId, NewQuestion};

/// A question as written in a fixture file (no id; storage assigns it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Contents of a fixture file
///
/// ```json
/// {
///   "categories": [{"id": 1, "type": "Science"}],
///   "questions": [{"question": "...", "answer": "...", "category": 1, "difficulty": 2}]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub categories: Vec<Category>,
    pub questions: Vec<FixtureQuestion>,
}

/// Counts of records a seeding run added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

impl Fixtures {
    /// Read a fixture file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StorageError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StorageError::FixtureFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The standard category set
    pub fn default_categories() -> Self {
        let categories = [
            "Science",
            "Art",
            "Geography",
            "History",
            "Entertainment",
            "Sports",
        ]
        .into_iter()
        .zip(1i64..)
        .map(|(kind, id)| Category::new(id, kind))
        .collect();

        Self {
            categories,
            questions: Vec::new(),
        }
    }

    /// Insert every category and question not already present
    ///
    /// A question is present when one with the same text and category is
    /// stored, so reapplying a fixture file on restart adds nothing.
    pub async fn apply<R: QuestionRepository + ?Sized>(
        &self,
        repository: &R,
    ) -> Result<SeedReport, StorageError> {
        let mut report = SeedReport::default();

        for category in &self.categories {
            if repository.find_category(category.id).await?.is_some() {
                debug!("Category {} already present, skipping", category.id);
                continue;
            }
            repository.insert_category(category.clone()).await?;
            report.categories += 1;
        }

        let mut stored: HashSet<(String, CategoryId)> = repository
            .list_questions()
            .await?
            .into_iter()
            .map(|q| (q.question, q.category))
            .collect();

        for (index, fixture) in self.questions.iter().enumerate() {
            let key = (fixture.question.clone(), CategoryId::new(fixture.category));
            if stored.contains(&key) {
                debug!("Fixture question {} already present, skipping", index);
                continue;
            }

            let question = NewQuestion::try_new(
                Some(fixture.question.clone()),
                Some(fixture.answer.clone()),
                Some(fixture.difficulty),
                Some(fixture.category),
            )
            .map_err(|source| StorageError::FixtureQuestion { index, source })?;
            repository.insert_question(question).await?;
            stored.insert(key);
            report.questions += 1;
        }

        info!(
            "Seeded {} categories and {} questions",
            report.categories, report.questions
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryQuestionRepository, SqliteQuestionRepository};
    use std::io::Write;

    #[test]
    fn test_default_categories() {
        let fixtures = Fixtures::default_categories();
        assert_eq!(fixtures.categories.len(), 6);
        assert_eq!(fixtures.categories[0], Category::new(1, "Science"));
        assert_eq!(fixtures.categories[5], Category::new(6, "Sports"));
    }

    #[tokio::test]
    async fn test_load_and_apply() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "categories": [{{"id": 1, "type": "Science"}}, {{"id": 2, "type": "Art"}}],
                "questions": [
                    {{"question": "Hematology studies what?", "answer": "Blood", "category": 1, "difficulty": 4}}
                ]
            }}"#
        )
        .unwrap();

        let fixtures = Fixtures::load(file.path()).unwrap();
        let repo = InMemoryQuestionRepository::new();
        let report = fixtures.apply(&repo).await.unwrap();

        assert_eq!(report, SeedReport { categories: 2, questions: 1 });
        assert_eq!(repo.list_questions().await.unwrap()[0].answer, "Blood");
    }

    #[tokio::test]
    async fn test_existing_categories_are_skipped() {
        let repo = InMemoryQuestionRepository::new();
        Fixtures::default_categories().apply(&repo).await.unwrap();
        let report = Fixtures::default_categories().apply(&repo).await.unwrap();
        assert_eq!(report.categories, 0);
        assert_eq!(repo.list_categories().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_reseeding_across_restarts_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.db");
        let fixtures = Fixtures {
            categories: vec![Category::new(1, "Science")],
            questions: vec![FixtureQuestion {
                question: "Hematology studies what?".to_string(),
                answer: "Blood".to_string(),
                category: 1,
                difficulty: 4,
            }],
        };

        for boot in 0..3 {
            let repo = SqliteQuestionRepository::open(&path).unwrap();
            let report = fixtures.apply(&repo).await.unwrap();
            let expected = if boot == 0 { 1 } else { 0 };
            assert_eq!(report.questions, expected);
            assert_eq!(repo.list_questions().await.unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_same_text_in_another_category_is_seeded() {
        let repo = InMemoryQuestionRepository::new();
        let question = |category| FixtureQuestion {
            question: "Name a famous painter".to_string(),
            answer: "Monet".to_string(),
            category,
            difficulty: 1,
        };
        let fixtures = Fixtures {
            categories: vec![],
            questions: vec![question(2), question(5)],
        };

        assert_eq!(fixtures.apply(&repo).await.unwrap().questions, 2);
        assert_eq!(fixtures.apply(&repo).await.unwrap().questions, 0);
        assert_eq!(repo.list_questions().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_incomplete_fixture_question_is_rejected() {
        let fixtures = Fixtures {
            categories: vec![],
            questions: vec![FixtureQuestion {
                question: "No answer".to_string(),
                answer: String::new(),
                category: 1,
                difficulty: 1,
            }],
        };
        let repo = InMemoryQuestionRepository::new();
        let result = fixtures.apply(&repo).await;
        assert!(matches!(
            result,
            Err(StorageError::FixtureQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Fixtures::load(file.path()),
            Err(StorageError::FixtureFormat { .. })
        ));
    }
}
