//! Client-side recipe filtering for sources without server-side queries.

use crate::model::Recipe;

/// Whether a recipe's title, category or any ingredient name contains `query`
pub fn matches_text(recipe: &Recipe, query: &str) -> bool {
    let query = query.to_lowercase();
    recipe.title.to_lowercase().contains(&query)
        || recipe.category.to_lowercase().contains(&query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(&query))
}

/// Whether a recipe belongs to `category`, ignoring case
pub fn matches_category(recipe: &Recipe, category: &str) -> bool {
    recipe.category.to_lowercase() == category.to_lowercase()
}

/// Recipes matching `query`; a blank query keeps everything
pub fn search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    if query.trim().is_empty() {
        return recipes.iter().collect();
    }
    recipes.iter().filter(|r| matches_text(r, query)).collect()
}

pub fn by_category<'a>(recipes: &'a [Recipe], category: &str) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| matches_category(r, category))
        .collect()
}
