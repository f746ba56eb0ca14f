//! Recipe catalog browsing with categorized suggestions and a search history.
//!
//! The quickest way in is [`RecipeBrowser`]:
//!
//! ```no_run
//! use recipe_browser::RecipeBrowser;
//!
//! # async fn run() -> Result<(), recipe_browser::BrowseError> {
//! let mut browser = RecipeBrowser::builder().build().await?;
//! let results = browser.search("biryani").await?;
//! println!("{}", results.summary());
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod history;
pub mod model;
pub mod sources;
pub mod storage;
pub mod taxonomy;
pub mod uniffi_bindings;

use std::time::Duration;

pub use browser::{RecipeBrowser, RecipeBrowserBuilder};
pub use catalog::{Catalog, CategoryPage, CategoryStats, Detail, Listing, SearchResults, Variations};
pub use config::{AppConfig, SourceMode};
pub use error::{BrowseError, Result};
pub use history::SearchHistory;
pub use model::{Difficulty, Ingredient, Recipe};
pub use sources::{
    ApiSource, DocumentLocation, MemorySource, RecipeQuery, RecipeSource, RetrySource,
    SourceFactory, StaticSource,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use taxonomy::{CategoryMatch, Suggestions, Taxonomy};

/// Suggestions from the built-in taxonomy
///
/// # Example
/// ```
/// let suggestions = recipe_browser::suggest_recipes("dos");
/// assert!(suggestions.matches.iter().any(|m| m.category == "Breakfast"));
/// ```
pub fn suggest_recipes(query: &str) -> Suggestions {
    Suggestions {
        query: query.to_string(),
        matches: Taxonomy::builtin().search(query),
    }
}

/// Search a recipe API for recipes matching `query`
pub async fn search_recipes(base_url: &str, query: &str) -> Result<Vec<Recipe>> {
    search_recipes_with_timeout(base_url, query, None).await
}

/// Search a recipe API with an optional request timeout
pub async fn search_recipes_with_timeout(
    base_url: &str,
    query: &str,
    timeout: Option<Duration>,
) -> Result<Vec<Recipe>> {
    let source = ApiSource::new(base_url, timeout)?;
    source.list(&RecipeQuery::search(query)).await
}

/// Look up one recipe on a recipe API
///
/// An unknown id is `Ok(None)`.
pub async fn fetch_recipe(base_url: &str, id: &str) -> Result<Option<Recipe>> {
    fetch_recipe_with_timeout(base_url, id, None).await
}

pub async fn fetch_recipe_with_timeout(
    base_url: &str,
    id: &str,
    timeout: Option<Duration>,
) -> Result<Option<Recipe>> {
    let source = ApiSource::new(base_url, timeout)?;
    source.get(id).await
}
