//! Shared handler state.

use std::sync::Arc;

use crate::quiz::QuizSelector;
use crate::store::TriviaStore;

/// State shared across trivia handlers
pub struct TriviaState {
    pub store: Arc<dyn TriviaStore>,
    pub quiz: QuizSelector,
}

impl TriviaState {
    /// State with an entropy-seeded quiz selector
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self::with_selector(store, QuizSelector::new())
    }

    pub fn with_selector(store: Arc<dyn TriviaStore>, quiz: QuizSelector) -> Self {
        Self { store, quiz }
    }
}
