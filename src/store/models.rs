//! Row types shared by every store backend.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A labeled grouping for questions
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// A quiz item
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl Question {
    /// Case-insensitive substring match on the question text.
    ///
    /// `needle` must already be lowercased. Folding is Unicode-aware, so
    /// "élan" matches "Élan".
    pub fn mentions(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
    }
}

/// A validated question that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub(crate) fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
