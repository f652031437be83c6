//! Category entity

use serde::{Deserialize, Serialize};

/// Identifier of a question category
///
/// Id `0` never names a stored category; clients use it to mean
/// "all categories" when scoping a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Whether this id names a concrete category rather than "all"
    pub fn is_specific(self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category (Entity, read-only over HTTP)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display label
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_type_key() {
        let json = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn test_zero_is_not_specific() {
        assert!(!CategoryId::new(0).is_specific());
        assert!(CategoryId::new(3).is_specific());
    }
}
