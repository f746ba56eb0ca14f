use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Url};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::{RecipeQuery, RecipeSource};
use crate::error::{BrowseError, Result};
use crate::filter;
use crate::model::Recipe;

/// Where the recipe document lives
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentLocation {
    Remote(Url),
    Local(PathBuf),
}

impl DocumentLocation {
    /// `http(s)://` locations are fetched, anything else is read from disk
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DocumentLocation::Remote(url),
            _ => DocumentLocation::Local(PathBuf::from(location)),
        }
    }
}

/// A static JSON document holding the whole recipe array
///
/// The document is loaded once on first use and filtered client-side. A failed
/// load is not cached, so the next call tries again.
pub struct StaticSource {
    client: Client,
    location: DocumentLocation,
    recipes: OnceCell<Vec<Recipe>>,
}

impl StaticSource {
    pub fn new(location: DocumentLocation, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(concat!("recipe-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            location,
            recipes: OnceCell::new(),
        })
    }

    async fn recipes(&self) -> Result<&[Recipe]> {
        let recipes = self
            .recipes
            .get_or_try_init(|| self.load())
            .await?;
        Ok(recipes.as_slice())
    }

    async fn load(&self) -> Result<Vec<Recipe>> {
        let body = match &self.location {
            DocumentLocation::Remote(url) => {
                debug!("Fetching recipe document from {}", url);
                let response = self.client.get(url.clone()).send().await?;
                if !response.status().is_success() {
                    return Err(BrowseError::Status {
                        url: url.to_string(),
                        status: response.status().as_u16(),
                    });
                }
                response.bytes().await?.to_vec()
            }
            DocumentLocation::Local(path) => {
                debug!("Reading recipe document from {}", path.display());
                tokio::fs::read(path).await?
            }
        };

        let recipes: Vec<Recipe> = serde_json::from_slice(&body)?;
        info!("Loaded {} recipes from static document", recipes.len());
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
        let recipes = self.recipes().await?;
        let matched: Vec<&Recipe> = match query {
            RecipeQuery::All => recipes.iter().collect(),
            RecipeQuery::Search(text) => filter::search(recipes, text),
            RecipeQuery::Category(label) => filter::by_category(recipes, label),
        };
        Ok(matched.into_iter().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes = self.recipes().await?;
        Ok(recipes.iter().find(|r| r.id == id).cloned())
    }
}
