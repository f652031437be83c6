//! In-memory repository double shared by the use case tests.

use crate::ports::question_repository::{QuestionRepository, RepositoryError};
use async_trait::async_trait;
use std::sync::Mutex;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId};

#[derive(Default)]
pub(crate) struct StubRepository {
    questions: Mutex<Vec<Question>>,
    categories: Mutex<Vec<Category>>,
    next_id: Mutex<i64>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl StubRepository {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Default::default()
        }
    }

    pub fn with_categories(self, categories: &[(i64, &str)]) -> Self {
        *self.categories.lock().unwrap() = categories
            .iter()
            .map(|(id, kind)| Category::new(*id, *kind))
            .collect();
        self
    }

    /// Add `count` questions in `category`, texts "Question N"
    pub fn with_questions(self, count: usize, category: i64) -> Self {
        for _ in 0..count {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            self.questions.lock().unwrap().push(Question {
                id: QuestionId::new(id),
                question: format!("Question {id}"),
                answer: format!("Answer {id}"),
                category: CategoryId::new(category),
                difficulty: 1,
            });
        }
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn read_guard(&self) -> Result<(), RepositoryError> {
        if self.fail_reads {
            return Err(RepositoryError::Persistence("read failed".to_string()));
        }
        Ok(())
    }

    fn write_guard(&self) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Persistence("write failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for StubRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        self.read_guard()?;
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn find_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, RepositoryError> {
        self.read_guard()?;
        Ok(filter.apply(&self.questions.lock().unwrap()))
    }

    async fn count_questions(&self, filter: &QuestionFilter) -> Result<usize, RepositoryError> {
        self.read_guard()?;
        Ok(filter.apply(&self.questions.lock().unwrap()).len())
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        self.read_guard()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        self.write_guard()?;
        let mut next_id = self.next_id.lock().unwrap();
        let id = QuestionId::new(*next_id);
        *next_id += 1;
        self.questions
            .lock()
            .unwrap()
            .push(Question::from_new(id, question));
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError> {
        self.write_guard()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.read_guard()?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        self.read_guard()?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn insert_category(&self, category: Category) -> Result<(), RepositoryError> {
        self.write_guard()?;
        self.categories.lock().unwrap().push(category);
        Ok(())
    }
}
