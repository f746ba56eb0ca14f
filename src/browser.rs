use log::{debug, warn};
use std::sync::Arc;

use crate::catalog::{
    Catalog, CategoryPage, Detail, Listing, SearchResults, Variations,
};
use crate::config::AppConfig;
use crate::error::{BrowseError, Result};
use crate::fixtures;
use crate::history::SearchHistory;
use crate::model::Recipe;
use crate::sources::{RecipeSource, SourceFactory};
use crate::storage::{FileStore, KeyValueStore};
use crate::taxonomy::{Suggestions, Taxonomy};

/// A browsing session: the catalog plus the search history
///
/// Built once at the composition root and handed to whatever drives it.
#[derive(Debug)]
pub struct RecipeBrowser {
    catalog: Catalog,
    history: SearchHistory,
}

impl RecipeBrowser {
    /// Creates a new builder for a browsing session
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder();
    /// ```
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Run a submitted search and remember the query
    ///
    /// The query is recorded before results are fetched, so a failed fetch
    /// still leaves it in the history. A history write failure is logged and
    /// does not fail the search.
    pub async fn search(&mut self, query: &str) -> Result<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Err(BrowseError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        match self.history.record(query).await {
            Ok(true) => debug!("Recorded search \"{}\"", query),
            Ok(false) => {}
            Err(e) => warn!("Failed to save search history: {}", e),
        }

        self.catalog.search_results(query).await
    }

    pub fn suggest(&self, query: &str) -> Suggestions {
        self.catalog.suggest(query)
    }

    /// Follow a suggestion: remember the name and find its recipe
    pub async fn open_suggestion(&mut self, name: &str) -> Option<Recipe> {
        if let Err(e) = self.history.record(name).await {
            warn!("Failed to save search history: {}", e);
        }
        self.catalog.resolve_by_name(name).await
    }

    pub async fn home(&self, search: Option<&str>) -> Listing {
        self.catalog.home(search).await
    }

    pub async fn category_page(&self, slug: &str, page: usize) -> CategoryPage {
        self.catalog.category_page(slug, page).await
    }

    pub async fn variations(&self, category: &str) -> Variations {
        self.catalog.variations(category).await
    }

    pub async fn recipe_detail(&self, id: &str) -> Result<Detail> {
        self.catalog.recipe_detail(id).await
    }

    pub fn recent_searches(&self) -> &[String] {
        self.history.entries()
    }

    pub async fn clear_history(&mut self) -> Result<()> {
        self.history.clear().await
    }
}

/// Builder for configuring a browsing session
///
/// Anything not set explicitly is derived from the configuration: the source
/// from [`SourceFactory`], the store from the history directory.
#[derive(Default)]
pub struct RecipeBrowserBuilder {
    config: Option<AppConfig>,
    source: Option<Arc<dyn RecipeSource>>,
    store: Option<Arc<dyn KeyValueStore>>,
    taxonomy: Option<Taxonomy>,
    fallback: Option<Vec<Recipe>>,
    history_limit: Option<usize>,
}

impl RecipeBrowserBuilder {
    /// Use this configuration instead of the defaults
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Serve recipes from this source
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{MemorySource, RecipeBrowser};
    /// use std::sync::Arc;
    ///
    /// let builder = RecipeBrowser::builder().source(Arc::new(MemorySource::samples()));
    /// ```
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Persist the search history in this store
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Suggest names from this taxonomy instead of the built-in one
    pub fn taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = Some(taxonomy);
        self
    }

    /// Recipes shown when the source fails a category listing
    pub fn fallback_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.fallback = Some(recipes);
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the session and load the persisted history
    ///
    /// # Errors
    /// Returns `BrowseError` if the configured source cannot be created
    /// (e.g. an invalid base URL) or the history limit is zero.
    pub async fn build(self) -> Result<RecipeBrowser> {
        let config = self.config.unwrap_or_default();

        let limit = self.history_limit.unwrap_or(config.history.limit);
        if limit == 0 {
            return Err(BrowseError::Builder(
                "History limit must be at least 1".to_string(),
            ));
        }

        let source = match self.source {
            Some(source) => source,
            None => SourceFactory::from_config(&config)?,
        };

        let store: Arc<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileStore::new(config.history.resolve_dir())),
        };

        let catalog = Catalog::new(
            source,
            self.taxonomy.unwrap_or_default(),
            self.fallback.unwrap_or_else(fixtures::sample_recipes),
            config.catalog.page_size,
        );
        let history = SearchHistory::load(store, limit).await;

        Ok(RecipeBrowser { catalog, history })
    }
}
