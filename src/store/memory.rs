//! In-memory trivia store.
//!
//! Tables are `BTreeMap`s keyed by id, so iteration order is id order.
//! Ids are handed out from monotonic counters and never reused.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::models::{Category, NewQuestion, Question};
use super::{StoreError, StoreResult, TriviaStore};

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_category_id: i64,
    next_question_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            questions: BTreeMap::new(),
            next_category_id: 1,
            next_question_id: 1,
        }
    }
}

/// Trivia store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn create_category(&self, kind: &str) -> StoreResult<Category> {
        let mut tables = self.write()?;
        let id = tables.next_category_id;
        tables.next_category_id += 1;

        let category = Category {
            id,
            kind: kind.to_string(),
        };
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn count_questions(&self) -> StoreResult<u64> {
        Ok(self.read()?.questions.len() as u64)
    }

    async fn list_questions(&self, offset: u64, limit: u32) -> StoreResult<Vec<Question>> {
        let tables = self.read()?;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);

        Ok(tables
            .questions
            .values()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();

        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.mentions(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;

        if !tables.categories.contains_key(&question.category) {
            return Err(StoreError::UnknownCategory(question.category));
        }

        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let question = question.with_id(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &HashSet<i64>,
    ) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn test_insert_requires_existing_category() {
        let store = MemoryStore::new();

        let result = store.insert_question(new_question("Orphan?", 42)).await;
        assert!(matches!(result, Err(StoreError::UnknownCategory(42))));
        assert_eq!(store.count_questions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let science = store.create_category("Science").await.unwrap();

        let first = store
            .insert_question(new_question("First?", science.id))
            .await
            .unwrap();
        assert!(store.delete_question(first.id).await.unwrap());

        let second = store
            .insert_question(new_question("Second?", science.id))
            .await
            .unwrap();
        assert!(second.id > first.id);
        assert!(store.get_question(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_window() {
        let store = MemoryStore::new();
        let art = store.create_category("Art").await.unwrap();
        for i in 0..12 {
            store
                .insert_question(new_question(&format!("Q{}?", i), art.id))
                .await
                .unwrap();
        }

        let page = store.list_questions(10, 10).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].question, "Q10?");

        let past_end = store.list_questions(50, 10).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = MemoryStore::new();
        let geo = store.create_category("Geography").await.unwrap();
        store
            .insert_question(new_question("What is the capital of Greece?", geo.id))
            .await
            .unwrap();

        assert_eq!(store.search_questions("CAPITAL").await.unwrap().len(), 1);
        assert_eq!(store.search_questions("").await.unwrap().len(), 1);
        assert!(store.search_questions("volcano").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quiz_candidates_respect_scope_and_exclusions() {
        let store = MemoryStore::new();
        let art = store.create_category("Art").await.unwrap();
        let sports = store.create_category("Sports").await.unwrap();

        let a = store.insert_question(new_question("A?", art.id)).await.unwrap();
        let b = store.insert_question(new_question("B?", art.id)).await.unwrap();
        store.insert_question(new_question("C?", sports.id)).await.unwrap();

        let exclude: HashSet<i64> = [a.id].into_iter().collect();
        let in_art = store.quiz_candidates(Some(art.id), &exclude).await.unwrap();
        assert_eq!(in_art, vec![b.clone()]);

        let anywhere = store.quiz_candidates(None, &exclude).await.unwrap();
        assert_eq!(anywhere.len(), 2);
    }
}
