//! Default category seeding.

use tracing::info;

use super::{StoreResult, TriviaStore};

/// Categories every fresh trivia database starts with, in id order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Insert [`DEFAULT_CATEGORIES`] if the store has no categories yet.
///
/// Returns the number of categories inserted (0 when already seeded).
pub async fn seed_default_categories(store: &dyn TriviaStore) -> StoreResult<usize> {
    if !store.list_categories().await?.is_empty() {
        info!("Categories already present, skipping seed");
        return Ok(0);
    }

    for kind in DEFAULT_CATEGORIES {
        store.create_category(kind).await?;
    }

    info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}
