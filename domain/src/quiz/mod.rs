//! Quiz play: picking the next unasked question.

pub mod selector;

pub use selector::QuizSelector;
