//! Domain layer for trivia-api
//!
//! This crate contains the entities and the query and selection logic.
//! It has no dependencies on storage, transport or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questions and Categories
//!
//! A [`Question`] is filed under one [`Category`]. Storage assigns ids; the
//! domain only validates the fields a caller supplies ([`NewQuestion`]).
//!
//! ## Queries
//!
//! - **Pagination**: 1-indexed pages of [`PAGE_SIZE`] items over storage order
//! - **Filters**: category equality and case-insensitive substring search
//!
//! ## Quiz
//!
//! [`QuizSelector`] draws a random question the caller has not yet been
//! served, optionally scoped to a category.

pub mod core;
pub mod query;
pub mod quiz;

// Re-export commonly used types
pub use core::{
    category::{Category, CategoryId},
    error::DomainError,
    question::{NewQuestion, Question, QuestionId},
};
pub use query::{
    filter::{QuestionFilter, SearchTerm, by_category, count_in_category, search},
    pagination::{PAGE_SIZE, Page, page_count, paginate},
};
pub use quiz::QuizSelector;
