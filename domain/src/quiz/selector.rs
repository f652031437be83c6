//! Random, non-repeating quiz question selection
//!
//! The selector keeps no memory between calls. A quiz session avoids
//! repeats only because the caller sends every id it has already been
//! served; each call draws afresh from whatever remains.

use crate::core::category::CategoryId;
use crate::core::question::{Question, QuestionId};
use rand::Rng;
use rand::seq::SliceRandom;

/// Stateless picker for the next quiz question
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizSelector;

impl QuizSelector {
    /// Questions eligible for the next draw
    ///
    /// Excludes every id in `previous`, then restricts to `category` when it
    /// names a concrete category. `None` and the "all" id both leave the pool
    /// unscoped.
    pub fn candidate_pool(
        questions: &[Question],
        previous: &[QuestionId],
        category: Option<CategoryId>,
    ) -> Vec<Question> {
        let scope = category.filter(|c| c.is_specific());
        questions
            .iter()
            .filter(|q| !previous.contains(&q.id))
            .filter(|q| scope.is_none_or(|c| q.category == c))
            .cloned()
            .collect()
    }

    /// Draw one candidate uniformly at random; `None` when the pool is empty
    pub fn pick<R: Rng + ?Sized>(pool: &[Question], rng: &mut R) -> Option<Question> {
        pool.choose(rng).cloned()
    }

    /// Next question for a quiz, or `None` once the quiz is complete
    pub fn next_question(
        questions: &[Question],
        previous: &[QuestionId],
        category: Option<CategoryId>,
    ) -> Option<Question> {
        let pool = Self::candidate_pool(questions, previous, category);
        Self::pick(&pool, &mut rand::thread_rng())
    }
}
