//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a stored trivia question and its insert form
//! - [`category::Category`]: the label a question is filed under
//! - [`error::DomainError`]: domain-level errors

pub mod category;
pub mod error;
pub mod question;
