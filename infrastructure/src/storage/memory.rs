//! In-process question store
//!
//! Tables are `BTreeMap`s keyed by id, so iteration is already in id order.
//! Ids come from a counter that only grows; a deleted id is never handed
//! out again.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use trivia_application::{QuestionRepository, RepositoryError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    last_id: i64,
}

/// Question repository held entirely in memory
///
/// Thread-safe via `RwLock`; no lock is held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    tables: RwLock<Tables>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::Persistence("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::Persistence("store lock poisoned".to_string()))
    }

    /// Every question in id order
    fn snapshot(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.read()?.questions.values().cloned().collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        self.snapshot()
    }

    async fn find_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, RepositoryError> {
        Ok(filter.apply(&self.snapshot()?))
    }

    async fn count_questions(&self, filter: &QuestionFilter) -> Result<usize, RepositoryError> {
        Ok(filter.count(&self.snapshot()?))
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        let mut tables = self.write()?;
        tables.last_id += 1;
        let id = QuestionId::new(tables.last_id);
        tables.questions.insert(id, Question::from_new(id, question));
        debug!("Inserted question {} into memory store", id);
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError> {
        self.write()?
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn insert_category(&self, category: Category) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if tables.categories.contains_key(&category.id) {
            return Err(RepositoryError::Persistence(format!(
                "category {} already exists",
                category.id
            )));
        }
        tables.categories.insert(category.id, category);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::conformance;

    #[tokio::test]
    async fn test_conformance_suite() {
        conformance::run_all(&InMemoryQuestionRepository::new()).await;
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryQuestionRepository::new();
        let first = repo
            .insert_question(conformance::new_question("one", 1))
            .await
            .unwrap();
        repo.delete_question(first).await.unwrap();
        let second = repo
            .insert_question(conformance::new_question("two", 1))
            .await
            .unwrap();
        assert!(second > first);
    }
}
