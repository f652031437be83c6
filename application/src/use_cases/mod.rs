//! Use cases
//!
//! Application-level operations, one per endpoint, that compose the
//! domain's filters, pagination and quiz selector over the repository.

pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_category_questions;
pub mod list_questions;
pub mod next_quiz_question;
pub mod search_questions;

#[cfg(test)]
pub(crate) mod test_support;
