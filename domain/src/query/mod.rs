//! Query logic over question sets: paging and filtering.
//!
//! - [`pagination`]: fixed-size, 1-indexed pages
//! - [`filter`]: category scoping, substring search and their conjunction

pub mod filter;
pub mod pagination;
