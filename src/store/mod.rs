//! # Trivia Store
//!
//! Data-access layer for categories and questions.
//!
//! Handlers never talk to a database directly; they go through the
//! [`TriviaStore`] trait. Two backends exist:
//!
//! - [`SqliteStore`] - sqlx connection pool, used when serving
//! - [`MemoryStore`] - lock-guarded in-process tables, used by tests and
//!   `serve --in-memory`
//!
//! All listings are ordered by id ascending.

mod memory;
mod models;
mod seed;
mod sqlite;

pub use memory::MemoryStore;
pub use models::{Category, NewQuestion, Question};
pub use seed::{seed_default_categories, DEFAULT_CATEGORIES};
pub use sqlite::SqliteStore;

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A question referenced a category that does not exist
    #[error("Unknown category: {0}")]
    UnknownCategory(i64),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// In-memory table lock was poisoned by a panicking writer
    #[error("Lock poisoned")]
    LockPoisoned,
}

/// Data access for the trivia domain
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Insert a category and return it with its assigned id
    async fn create_category(&self, kind: &str) -> StoreResult<Category>;

    /// All categories, ordered by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Look up one category
    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Total number of questions
    async fn count_questions(&self) -> StoreResult<u64>;

    /// A window of questions ordered by id
    async fn list_questions(&self, offset: u64, limit: u32) -> StoreResult<Vec<Question>>;

    /// All questions of one category, ordered by id
    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring search over question text
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Look up one question
    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Insert a question.
    ///
    /// Fails with [`StoreError::UnknownCategory`] if the category does not exist.
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Delete a question. Returns `false` if no such question existed.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;

    /// Questions eligible for a quiz round: those in `category` (or all
    /// questions when `None`) whose id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &HashSet<i64>,
    ) -> StoreResult<Vec<Question>>;
}
