//! # Response Formatting
//!
//! Success envelopes for the trivia endpoints. Every body carries
//! `"success": true`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::{Category, Question};

/// Category id to type label. Serialized as a JSON object with string keys.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build a [`CategoryMap`] from store rows
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// `GET /categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// `GET /questions`
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: CategoryMap,
}

impl QuestionPageResponse {
    pub fn new(questions: Vec<Question>, total_questions: u64, categories: CategoryMap) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            categories,
        }
    }
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: String,
}

impl CategoryQuestionsResponse {
    pub fn new(questions: Vec<Question>, current_category: String) -> Self {
        let total_questions = questions.len() as u64;
        Self {
            success: true,
            questions,
            total_questions,
            current_category,
        }
    }
}

/// `POST /questions/search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

impl SearchResponse {
    pub fn new(questions: Vec<Question>) -> Self {
        let total_questions = questions.len() as u64;
        Self {
            success: true,
            questions,
            total_questions,
        }
    }
}

/// `POST /questions`
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

impl CreatedResponse {
    pub fn new(created: i64) -> Self {
        Self {
            success: true,
            created,
        }
    }
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

impl DeletedResponse {
    pub fn new(deleted: i64) -> Self {
        Self {
            success: true,
            deleted,
        }
    }
}

/// `POST /quizzes`. `question` is `null` once the quiz is exhausted.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

impl QuizResponse {
    pub fn new(question: Option<Question>) -> Self {
        Self {
            success: true,
            question,
        }
    }
}
