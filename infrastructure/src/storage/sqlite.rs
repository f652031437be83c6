//! SQLite-backed question store
//!
//! Category equality and id exclusion run in SQL. Substring search runs
//! in memory through [`search`](trivia_domain::search):
//! SQLite's `LIKE` folds ASCII only and treats `%`/`_` as wildcards, which
//! would make results differ from the in-memory adapter.

use super::StorageError;
use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};
use trivia_application::{QuestionRepository, RepositoryError};
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId, search,
};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    category   INTEGER NOT NULL,
    difficulty INTEGER NOT NULL
);
"#;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question repository persisted in a SQLite database
pub struct SqliteQuestionRepository {
    /// SQLite serializes access itself; the Mutex satisfies `Sync`
    conn: Arc<Mutex<Connection>>,
}

impl SqliteQuestionRepository {
    /// Open (or create) a database file and ensure the tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Opened SQLite store at {}", path.display());
        Self::with_connection(conn)
    }

    /// A private database that lives as long as this repository
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA).map_err(StorageError::Schema)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|_| RepositoryError::Persistence("connection lock poisoned".to_string()))
    }

    fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
        Ok(Question {
            id: QuestionId::new(row.get(0)?),
            question: row.get(1)?,
            answer: row.get(2)?,
            category: CategoryId::new(row.get(3)?),
            difficulty: row.get(4)?,
        })
    }

    fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category::new(row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    }

    /// Run the SQL-expressible part of `filter`
    fn select_questions(
        conn: &Connection,
        filter: &QuestionFilter,
    ) -> rusqlite::Result<Vec<Question>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(category) = filter.category {
            params_vec.push(Box::new(category.value()));
            conditions.push(format!("category = ?{}", params_vec.len()));
        }

        if !filter.exclude.is_empty() {
            let placeholders: Vec<String> = filter
                .exclude
                .iter()
                .map(|id| {
                    params_vec.push(Box::new(id.value()));
                    format!("?{}", params_vec.len())
                })
                .collect();
            conditions.push(format!("id NOT IN ({})", placeholders.join(", ")));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions {where_clause} ORDER BY id ASC");

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_refs.as_slice(), Self::row_to_question)?;
        rows.collect()
    }
}

fn persistence(e: rusqlite::Error) -> RepositoryError {
    warn!("SQLite error: {}", e);
    RepositoryError::Persistence(e.to_string())
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        let conn = self.conn()?;
        Self::select_questions(&conn, &QuestionFilter::new()).map_err(persistence)
    }

    async fn find_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, RepositoryError> {
        let conn = self.conn()?;
        let mut questions = Self::select_questions(&conn, filter).map_err(persistence)?;
        if let Some(term) = &filter.search {
            questions = search(&questions, term);
        }
        debug!("SQLite query returned {} questions", questions.len());
        Ok(questions)
    }

    async fn count_questions(&self, filter: &QuestionFilter) -> Result<usize, RepositoryError> {
        if filter.search.is_some() || !filter.exclude.is_empty() {
            return Ok(self.find_questions(filter).await?.len());
        }

        let conn = self.conn()?;
        let count: i64 = match filter.category {
            Some(category) => conn.query_row(
                "SELECT COUNT(*) FROM questions WHERE category = ?1",
                params![category.value()],
                |row| row.get(0),
            ),
            None => conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0)),
        }
        .map_err(persistence)?;

        Ok(count as usize)
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            params![id.value()],
            Self::row_to_question,
        )
        .optional()
        .map_err(persistence)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
            params![
                question.question(),
                question.answer(),
                question.category().value(),
                question.difficulty()
            ],
        )
        .map_err(persistence)?;
        Ok(QuestionId::new(conn.last_insert_rowid()))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError> {
        let conn = self.conn()?;
        let affected = conn
            .execute("DELETE FROM questions WHERE id = ?1", params![id.value()])
            .map_err(persistence)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC")
            .map_err(persistence)?;
        let rows = stmt
            .query_map([], Self::row_to_category)
            .map_err(persistence)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(persistence)
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, type FROM categories WHERE id = ?1",
            params![id.value()],
            Self::row_to_category,
        )
        .optional()
        .map_err(persistence)
    }

    async fn insert_category(&self, category: Category) -> Result<(), RepositoryError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO categories (id, type) VALUES (?1, ?2)",
            params![category.id.value(), category.kind],
        )
        .map_err(persistence)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::conformance;

    #[tokio::test]
    async fn test_conformance_suite() {
        let repo = SqliteQuestionRepository::open_in_memory().unwrap();
        conformance::run_all(&repo).await;
    }

    #[tokio::test]
    async fn test_questions_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.db");

        let id = {
            let repo = SqliteQuestionRepository::open(&path).unwrap();
            repo.insert_question(conformance::new_question("persisted?", 3))
                .await
                .unwrap()
        };

        let repo = SqliteQuestionRepository::open(&path).unwrap();
        let question = repo.find_question(id).await.unwrap().unwrap();
        assert_eq!(question.question, "persisted?");
        assert_eq!(question.category, CategoryId::new(3));
    }

    #[tokio::test]
    async fn test_autoincrement_does_not_reuse_ids() {
        let repo = SqliteQuestionRepository::open_in_memory().unwrap();
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
