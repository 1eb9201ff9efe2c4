//! # Quiz Selector
//!
//! Serves one random, not-yet-seen question per quiz round.
//!
//! Quiz sessions are held entirely by the caller: each round carries the
//! ids already served. A round is either *active* (at least one eligible
//! question left) or *exhausted* (none left, signalled by `None`).
//!
//! The selector owns a single RNG seeded once from OS entropy, so rapid
//! successive rounds never share a seed.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::store::{Question, StoreResult, TriviaStore};

/// Category id that selects questions from every category
pub const ANY_CATEGORY: i64 = 0;

/// Which questions a round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// Every category
    Any,
    /// A single category id
    Only(i64),
}

impl CategoryScope {
    /// Interpret a category id, where [`ANY_CATEGORY`] means all categories
    pub fn from_id(id: i64) -> Self {
        if id == ANY_CATEGORY {
            CategoryScope::Any
        } else {
            CategoryScope::Only(id)
        }
    }

    pub fn category_id(&self) -> Option<i64> {
        match self {
            CategoryScope::Any => None,
            CategoryScope::Only(id) => Some(*id),
        }
    }
}

/// One quiz request: a scope plus the ids already served
#[derive(Debug, Clone)]
pub struct QuizRound {
    pub scope: CategoryScope,
    pub previous: HashSet<i64>,
}

impl QuizRound {
    pub fn new(scope: CategoryScope, previous: impl IntoIterator<Item = i64>) -> Self {
        Self {
            scope,
            previous: previous.into_iter().collect(),
        }
    }
}

/// Uniform random question picker
pub struct QuizSelector {
    rng: Mutex<StdRng>,
}

impl QuizSelector {
    /// Selector seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Selector with a fixed seed, for reproducible tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Remove and return one item chosen uniformly at random
    pub fn pick<T>(&self, mut candidates: Vec<T>) -> Option<T> {
        if candidates.is_empty() {
            return None;
        }

        // A poisoned RNG is still a valid RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let index = rng.gen_range(0..candidates.len());
        Some(candidates.swap_remove(index))
    }

    /// Draw the next question for `round`, or `None` once the quiz is exhausted
    pub async fn next_question(
        &self,
        store: &dyn TriviaStore,
        round: &QuizRound,
    ) -> StoreResult<Option<Question>> {
        let mut candidates = store
            .quiz_candidates(round.scope.category_id(), &round.previous)
            .await?;
        candidates.retain(|q| !round.previous.contains(&q.id));

        debug!(
            eligible = candidates.len(),
            previous = round.previous.len(),
            "Selecting quiz question"
        );

        Ok(self.pick(candidates))
    }
}

impl Default for QuizSelector {
    fn default() -> Self {
        Self::new()
    }
}
