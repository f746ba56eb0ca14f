use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recipe is to cook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ingredient line. `amount` stays textual ("2¼", "8-10").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.amount.is_empty(), self.unit.is_empty()) {
            (true, _) => write!(f, "{}", self.name),
            (false, true) => write!(f, "{} {}", self.amount, self.name),
            (false, false) => write!(f, "{} {} {}", self.amount, self.unit, self.name),
        }
    }
}

/// A catalog recipe as served by the recipe endpoint
///
/// Fields missing from a fetched document fall back to their defaults so a
/// single sparse entry does not reject the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub category: String,
    /// Minutes
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub difficulty: Difficulty,
    pub rating: f64,
}

impl Recipe {
    /// Case-insensitive title comparison
    pub fn title_matches(&self, name: &str) -> bool {
        self.title.to_lowercase() == name.to_lowercase()
    }
}
