//! Page flows over a recipe source.
//!
//! Each flow returns a plain view value: what a page would render once its
//! fetch settled. Fetch failures are folded into the view (a message, and for
//! category pages the built-in recipes) instead of aborting it.

use log::{debug, error, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::filter;
use crate::model::Recipe;
use crate::sources::{RecipeQuery, RecipeSource};
use crate::taxonomy::{Suggestions, Taxonomy};

/// Recipes per category page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 8;

const LOAD_FAILED: &str = "Failed to load recipes";
const CATEGORY_LOAD_FAILED: &str = "Failed to load recipes. Please try again.";

/// Outcome of a plain recipe listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Listing {
    Loaded { recipes: Vec<Recipe> },
    Failed { message: String },
}

impl Listing {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            Listing::Loaded { recipes } => recipes,
            Listing::Failed { .. } => &[],
        }
    }
}

/// Aggregate figures shown above a category listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub count: usize,
    /// Rounded to one decimal
    pub average_rating: f64,
    /// Rounded to whole minutes
    pub average_cooking_time: u32,
}

impl CategoryStats {
    pub fn from_recipes(recipes: &[Recipe]) -> Option<Self> {
        if recipes.is_empty() {
            return None;
        }
        let count = recipes.len();
        let rating: f64 = recipes.iter().map(|r| r.rating).sum();
        let minutes: f64 = recipes.iter().map(|r| r.cooking_time as f64).sum();
        Some(Self {
            count,
            average_rating: (rating / count as f64 * 10.0).round() / 10.0,
            average_cooking_time: (minutes / count as f64).round() as u32,
        })
    }
}

/// One page of a navigation category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage {
    pub slug: String,
    pub display_name: String,
    pub recipes: Vec<Recipe>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub stats: Option<CategoryStats>,
    /// Set when the source failed and `recipes` are built-in stand-ins
    pub error: Option<String>,
}

/// Recipes related to one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variations {
    pub category: String,
    pub recipes: Vec<Recipe>,
    pub error: Option<String>,
}

/// Outcome of a recipe lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Detail {
    Found { recipe: Recipe },
    NotFound { id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub recipes: Vec<Recipe>,
}

impl SearchResults {
    pub fn summary(&self) -> String {
        match self.recipes.len() {
            0 => format!("No recipes found for \"{}\"", self.query),
            1 => format!("Found 1 recipe for \"{}\"", self.query),
            n => format!("Found {} recipes for \"{}\"", n, self.query),
        }
    }
}

/// Data categories behind a navigation slug
pub fn category_mapping(slug: &str) -> Vec<String> {
    let mapped: &[&str] = match slug.to_lowercase().as_str() {
        "popular" => &["Popular"],
        "meat-seafood" => &["Meat-Seafood"],
        "healthy" => &["Healthy"],
        "holidays" => &["Holidays"],
        "cuisine" => &["Italian", "Indian", "Mexican", "Asian"],
        "seasonal" => &["Seasonal"],
        "italian" => &["Italian"],
        "indian" => &["Indian"],
        "mexican" => &["Mexican"],
        "salad" => &["Salad"],
        "dessert" => &["Dessert"],
        _ => return vec![slug.to_string()],
    };
    mapped.iter().map(|c| c.to_string()).collect()
}

/// Heading for a navigation slug
pub fn category_display_name(slug: &str) -> String {
    let fixed = match slug.to_lowercase().as_str() {
        "popular" => Some("Popular Recipes"),
        "meat-seafood" => Some("Meat & Seafood"),
        "healthy" => Some("Healthy & Diet"),
        "holidays" => Some("Holiday Recipes"),
        "cuisine" => Some("Cuisine Varieties"),
        "seasonal" => Some("Seasonal Recipes"),
        _ => None,
    };
    if let Some(name) = fixed {
        return name.to_string();
    }

    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Recipes".to_string(),
    }
}

/// Read-only browsing over one recipe source
pub struct Catalog {
    source: Arc<dyn RecipeSource>,
    taxonomy: Taxonomy,
    fallback: Vec<Recipe>,
    page_size: usize,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.source.name())
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    pub fn new(
        source: Arc<dyn RecipeSource>,
        taxonomy: Taxonomy,
        fallback: Vec<Recipe>,
        page_size: usize,
    ) -> Self {
        Self {
            source,
            taxonomy,
            fallback,
            page_size: page_size.max(1),
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn source(&self) -> &Arc<dyn RecipeSource> {
        &self.source
    }

    /// The home listing, optionally narrowed by a search term
    pub async fn home(&self, search: Option<&str>) -> Listing {
        let query = RecipeQuery::search(search.unwrap_or_default());
        match self.source.list(&query).await {
            Ok(recipes) => Listing::Loaded { recipes },
            Err(e) => {
                error!("Error fetching recipes: {}", e);
                Listing::Failed {
                    message: LOAD_FAILED.to_string(),
                }
            }
        }
    }

    /// One page of a navigation category
    ///
    /// Every mapped data category is listed and the results concatenated
    /// before paging. Categories whose request fails are skipped; if all of
    /// them fail the page falls back to matching built-in recipes.
    pub async fn category_page(&self, slug: &str, page: usize) -> CategoryPage {
        let page = page.max(1);
        let mapping = category_mapping(slug);
        debug!("Fetching categories: {:?}", mapping);

        let mut all = Vec::new();
        let mut failures = 0;
        for category in &mapping {
            match self.source.list(&RecipeQuery::category(category.as_str())).await {
                Ok(recipes) => all.extend(recipes),
                Err(e) => {
                    warn!("Failed to fetch category {}: {}", category, e);
                    failures += 1;
                }
            }
        }

        let (recipes, total_pages, error) = if failures == mapping.len() {
            let fallback: Vec<Recipe> = self
                .fallback
                .iter()
                .filter(|r| mapping.iter().any(|c| filter::matches_category(r, c)))
                .cloned()
                .collect();
            (fallback, 1, Some(CATEGORY_LOAD_FAILED.to_string()))
        } else {
            let total_pages = all.len().div_ceil(self.page_size).max(1);
            let recipes: Vec<Recipe> = all
                .into_iter()
                .skip((page - 1).saturating_mul(self.page_size))
                .take(self.page_size)
                .collect();
            (recipes, total_pages, None)
        };

        CategoryPage {
            slug: slug.to_string(),
            display_name: category_display_name(slug),
            stats: CategoryStats::from_recipes(&recipes),
            recipes,
            page,
            total_pages,
            error,
        }
    }

    /// Recipes sharing a category, with built-in stand-ins on failure
    pub async fn variations(&self, category: &str) -> Variations {
        match self.source.list(&RecipeQuery::category(category)).await {
            Ok(recipes) => Variations {
                category: category.to_string(),
                recipes,
                error: None,
            },
            Err(e) => {
                warn!("Failed to fetch variations for {}: {}", category, e);
                Variations {
                    category: category.to_string(),
                    recipes: filter::by_category(&self.fallback, category)
                        .into_iter()
                        .cloned()
                        .collect(),
                    error: Some(LOAD_FAILED.to_string()),
                }
            }
        }
    }

    /// Look up one recipe
    ///
    /// An unknown id is a [`Detail::NotFound`] view, not an error.
    pub async fn recipe_detail(&self, id: &str) -> Result<Detail> {
        Ok(match self.source.get(id).await? {
            Some(recipe) => Detail::Found { recipe },
            None => Detail::NotFound { id: id.to_string() },
        })
    }

    pub async fn search_results(&self, query: &str) -> Result<SearchResults> {
        let recipes = self.source.list(&RecipeQuery::search(query)).await?;
        Ok(SearchResults {
            query: query.to_string(),
            recipes,
        })
    }

    /// Dropdown suggestions from the taxonomy
    pub fn suggest(&self, query: &str) -> Suggestions {
        Suggestions {
            query: query.to_string(),
            matches: self.taxonomy.search(query),
        }
    }

    /// Pick the recipe a suggestion name most likely refers to
    ///
    /// Prefers an exact title match, then a title containing the name, then
    /// whatever the source ranked first. Failures are logged and yield `None`.
    pub async fn resolve_by_name(&self, name: &str) -> Option<Recipe> {
        let recipes = match self.source.list(&RecipeQuery::search(name)).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Error searching recipe by name: {}", e);
                return None;
            }
        };

        let needle = name.to_lowercase();
        let position = recipes
            .iter()
            .position(|r| r.title_matches(name))
            .or_else(|| {
                recipes
                    .iter()
                    .position(|r| r.title.to_lowercase().contains(&needle))
            })
            .unwrap_or(0);
        recipes.into_iter().nth(position)
    }
}
