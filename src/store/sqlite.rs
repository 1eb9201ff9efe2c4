//! SQLite-backed trivia store.

use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use tracing::debug;

use super::models::{Category, NewQuestion, Question};
use super::{StoreError, StoreResult, TriviaStore};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Largest exclusion list pushed into SQL as `NOT IN` binds.
///
/// SQLite caps a statement at 32766 parameters.
const MAX_EXCLUDED_BINDS: usize = 500;

/// Trivia store on a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database at `url` and make sure the schema exists
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.initialize_schema().await?;
        Ok(store)
    }

    /// Private in-memory database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.initialize_schema().await?;
        Ok(store)
    }

    /// Create tables if they do not exist yet
    pub async fn initialize_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                "type" TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL REFERENCES categories(id),
                difficulty INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
            "#,
        )
        .execute(&self.pool)
        .await?;

        debug!("SQLite schema initialized");
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TriviaStore for SqliteStore {
    async fn create_category(&self, kind: &str) -> StoreResult<Category> {
        let id = sqlx::query(r#"INSERT INTO categories ("type") VALUES (?)"#)
            .bind(kind)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Category {
            id,
            kind: kind.to_string(),
        })
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories ORDER BY id"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = ?"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn count_questions(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn list_questions(&self, offset: u64, limit: u32) -> StoreResult<Vec<Question>> {
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id LIMIT ? OFFSET ?",
            QUESTION_COLUMNS
        ))
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        // SQLite LIKE and lower() only fold ASCII, so matching happens here
        let needle = term.to_lowercase();

        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let mut rows = sqlx::query_as::<_, Question>(&sql).fetch(&self.pool);

        let mut questions = Vec::new();
        while let Some(question) = rows.try_next().await? {
            if question.mentions(&needle) {
                questions.push(question);
            }
        }
        Ok(questions)
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let category = question.category;
        if self.get_category(category).await?.is_none() {
            return Err(StoreError::UnknownCategory(category));
        }

        // The foreign key still guards inserts racing this check
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let dangling =
                matches!(&e, sqlx::Error::Database(db) if db.is_foreign_key_violation());
            if dangling {
                StoreError::UnknownCategory(category)
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(question.with_id(result.last_insert_rowid()))
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &HashSet<i64>,
    ) -> StoreResult<Vec<Question>> {
        let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM questions WHERE 1 = 1",
            QUESTION_COLUMNS
        ));

        if let Some(category) = category {
            query.push(" AND category = ").push_bind(category);
        }

        // Longer exclusion lists are applied by the retain below
        if !exclude.is_empty() && exclude.len() <= MAX_EXCLUDED_BINDS {
            query.push(" AND id NOT IN (");
            let mut ids = query.separated(", ");
            for id in exclude {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
        }

        query.push(" ORDER BY id");

        let mut questions = query
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;
        questions.retain(|q| !exclude.contains(&q.id));
        Ok(questions)
    }
}
