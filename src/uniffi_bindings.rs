//! UniFFI bindings for recipe-browser
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{BrowseError, Ingredient, Recipe};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub id: String,
    pub name: String,
    /// Textual amount (empty string if none)
    pub amount: String,
    /// Unit (empty string if none)
    pub unit: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            id: ingredient.id,
            name: ingredient.name,
            amount: ingredient.amount,
            unit: ingredient.unit,
        }
    }
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    /// Image URL (empty string if none)
    pub image: String,
    pub category: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<FfiIngredient>,
    pub instructions: Vec<String>,
    /// "Easy", "Medium" or "Hard"
    pub difficulty: String,
    pub rating: f64,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            category: recipe.category,
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            instructions: recipe.instructions,
            difficulty: recipe.difficulty.as_str().to_string(),
            rating: recipe.rating,
        }
    }
}

/// Suggested recipe names within one category
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCategoryMatch {
    pub category: String,
    pub recipes: Vec<String>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiBrowseError {
    /// Failed to reach the recipe endpoint or it answered with an error
    FetchError { message: String },
    /// The endpoint answered with data that is not a recipe list
    DecodeError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration or storage error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiBrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiBrowseError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiBrowseError::DecodeError { message } => write!(f, "Decode error: {}", message),
            FfiBrowseError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiBrowseError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiBrowseError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiBrowseError {}

impl From<BrowseError> for FfiBrowseError {
    fn from(err: BrowseError) -> Self {
        let message = err.to_string();
        match err {
            BrowseError::Fetch(_) | BrowseError::Status { .. } => {
                FfiBrowseError::FetchError { message }
            }
            BrowseError::Decode(_) => FfiBrowseError::DecodeError { message },
            BrowseError::InvalidInput(_) | BrowseError::Builder(_) => {
                FfiBrowseError::InvalidInput { message }
            }
            BrowseError::Storage(_) | BrowseError::Config(_) => {
                FfiBrowseError::ConfigError { message }
            }
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiBrowseError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiBrowseError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Suggest recipe names for a partial query
///
/// Returns at most five names per category, categories in their usual order.
/// A blank query yields no categories.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn suggest_recipes(query: String) -> Vec<FfiCategoryMatch> {
    crate::suggest_recipes(&query)
        .matches
        .into_iter()
        .map(|m| FfiCategoryMatch {
            category: m.category,
            recipes: m.recipes,
        })
        .collect()
}

/// Search a recipe API
///
/// # Arguments
/// * `base_url` - Base URL of the recipe endpoint, e.g. `http://localhost:3002`
/// * `query` - Free-text query; blank lists every recipe
/// * `timeout_seconds` - Optional timeout in seconds
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    base_url: String,
    query: String,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiRecipe>, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let timeout = timeout_seconds.map(Duration::from_secs);
        let recipes = crate::search_recipes_with_timeout(&base_url, &query, timeout).await?;
        Ok(recipes.into_iter().map(Into::into).collect())
    })
}

/// Look up one recipe by id
///
/// Returns `None` when the endpoint does not know the id.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe(
    base_url: String,
    id: String,
    timeout_seconds: Option<u64>,
) -> Result<Option<FfiRecipe>, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let timeout = timeout_seconds.map(Duration::from_secs);
        let recipe = crate::fetch_recipe_with_timeout(&base_url, &id, timeout).await?;
        Ok(recipe.map(Into::into))
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_recipes;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = sample_recipes().remove(0);
        let ffi_recipe: FfiRecipe = recipe.clone().into();

        assert_eq!(ffi_recipe.id, recipe.id);
        assert_eq!(ffi_recipe.title, recipe.title);
        assert_eq!(ffi_recipe.difficulty, recipe.difficulty.as_str());
        assert_eq!(ffi_recipe.ingredients.len(), recipe.ingredients.len());
        assert_eq!(ffi_recipe.ingredients[0].name, recipe.ingredients[0].name);
        assert_eq!(ffi_recipe.instructions, recipe.instructions);
    }

    #[test]
    fn test_suggest_recipes_ffi() {
        let matches = suggest_recipes("dos".to_string());
        let breakfast = matches.iter().find(|m| m.category == "Breakfast").unwrap();
        assert_eq!(breakfast.recipes[0], "Dosa");
        assert!(matches.iter().all(|m| m.recipes.len() <= 5));
        assert!(suggest_recipes("   ".to_string()).is_empty());
    }

    #[test]
    fn test_error_mapping() {
        let err: FfiBrowseError = BrowseError::Status {
            url: "http://localhost:3002/recipes".to_string(),
            status: 500,
        }
        .into();
        assert!(matches!(err, FfiBrowseError::FetchError { .. }));
        assert!(err.to_string().contains("status: 500"));

        let err: FfiBrowseError = BrowseError::InvalidInput("bad".to_string()).into();
        assert!(matches!(err, FfiBrowseError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = get_recipe("not a url".to_string(), "1".to_string(), None);
        assert!(matches!(result, Err(FfiBrowseError::InvalidInput { .. })));
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
