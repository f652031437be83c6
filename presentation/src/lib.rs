//! Presentation layer for trivia-api
//!
//! This crate contains the CLI definition and the HTTP boundary:
//! routing, request decoding, response shaping and error mapping.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, build_router, serve};
