mod api;
mod document;
mod factory;
mod memory;
mod retry;

pub use api::ApiSource;
pub use document::{DocumentLocation, StaticSource};
pub use factory::SourceFactory;
pub use memory::MemorySource;
pub use retry::RetrySource;

use async_trait::async_trait;
use std::fmt;

use crate::error::Result;
use crate::model::Recipe;

/// What part of the collection to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeQuery {
    All,
    /// Free-text search over title, category and ingredients
    Search(String),
    /// Recipes in one category label
    Category(String),
}

impl RecipeQuery {
    /// A search for `text`, or everything when `text` is blank
    pub fn search(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            RecipeQuery::All
        } else {
            RecipeQuery::Search(text)
        }
    }

    pub fn category(label: impl Into<String>) -> Self {
        RecipeQuery::Category(label.into())
    }
}

impl fmt::Display for RecipeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeQuery::All => write!(f, "all recipes"),
            RecipeQuery::Search(text) => write!(f, "search \"{}\"", text),
            RecipeQuery::Category(label) => write!(f, "category \"{}\"", label),
        }
    }
}

/// Unified trait for everything that serves recipes
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "api", "static")
    fn name(&self) -> &str;

    /// List recipes matching the query, in source order
    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>>;

    /// Look up one recipe; `Ok(None)` when the id is unknown
    async fn get(&self, id: &str) -> Result<Option<Recipe>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_lists_everything() {
        assert_eq!(RecipeQuery::search(""), RecipeQuery::All);
        assert_eq!(RecipeQuery::search("  "), RecipeQuery::All);
        assert_eq!(
            RecipeQuery::search("dosa"),
            RecipeQuery::Search("dosa".to_string())
        );
    }

    #[test]
    fn test_query_display() {
        assert_eq!(RecipeQuery::All.to_string(), "all recipes");
        assert_eq!(
            RecipeQuery::category("Italian").to_string(),
            "category \"Italian\""
        );
    }
}
