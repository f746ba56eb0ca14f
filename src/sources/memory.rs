use async_trait::async_trait;

use super::{RecipeQuery, RecipeSource};
use crate::error::Result;
use crate::filter;
use crate::fixtures;
use crate::model::Recipe;

/// A fixed in-memory recipe list
#[derive(Debug, Clone)]
pub struct MemorySource {
    recipes: Vec<Recipe>,
}

impl MemorySource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The built-in sample recipes
    pub fn samples() -> Self {
        Self::new(fixtures::sample_recipes())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

#[async_trait]
impl RecipeSource for MemorySource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
        let matched: Vec<&Recipe> = match query {
            RecipeQuery::All => self.recipes.iter().collect(),
            RecipeQuery::Search(text) => filter::search(&self.recipes, text),
            RecipeQuery::Category(label) => filter::by_category(&self.recipes, label),
        };
        Ok(matched.into_iter().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let source = MemorySource::samples();
        assert!(source.get("999").await.unwrap().is_none());
        assert_eq!(source.get("8").await.unwrap().unwrap().title, "Garden Fresh Salad");
    }

    #[tokio::test]
    async fn test_category_listing() {
        let source = MemorySource::samples();
        let snacks = source
            .list(&RecipeQuery::category("snacks"))
            .await
            .unwrap();
        assert_eq!(snacks.len(), 3);
        assert!(snacks.iter().all(|r| r.category == "Snacks"));
    }
}
