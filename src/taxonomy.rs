//! Categorized recipe-name suggestions.
//!
//! A [`Taxonomy`] is an ordered list of categories, each holding an ordered
//! list of known recipe names. Searching it is plain case-insensitive
//! substring containment: no scoring, results follow declaration order.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Cap on suggested names per category
pub const MAX_MATCHES_PER_CATEGORY: usize = 5;

/// One category of the taxonomy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub category: String,
    pub recipes: Vec<String>,
}

/// Matching recipe names within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub category: String,
    pub recipes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    pub fn new(entries: Vec<TaxonomyEntry>) -> Self {
        Self { entries }
    }

    /// Load a taxonomy from a JSON array of `{ "category", "recipes" }` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<TaxonomyEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Every recipe name in declaration order, duplicates across categories kept
    pub fn all_recipes(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.recipes.iter().map(String::as_str))
            .collect()
    }

    /// Search every category for names containing `query`
    ///
    /// A blank query yields no matches. The query itself is not trimmed, so
    /// `"dosa "` only matches names with a space after "dosa".
    pub fn search(&self, query: &str) -> Vec<CategoryMatch> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter_map(|entry| {
                let recipes: Vec<String> = entry
                    .recipes
                    .iter()
                    .filter(|name| name.to_lowercase().contains(&needle))
                    .take(MAX_MATCHES_PER_CATEGORY)
                    .cloned()
                    .collect();

                if recipes.is_empty() {
                    None
                } else {
                    Some(CategoryMatch {
                        category: entry.category.clone(),
                        recipes,
                    })
                }
            })
            .collect()
    }

    /// The built-in taxonomy used for search suggestions
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(category, recipes)| TaxonomyEntry {
                category: category.to_string(),
                recipes: recipes.iter().map(|r| r.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Suggestions for a query, ready for a dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub query: String,
    pub matches: Vec<CategoryMatch>,
}

impl Suggestions {
    pub fn total(&self) -> usize {
        self.matches.iter().map(|m| m.recipes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.matches.is_empty() {
            format!("No recipes found for \"{}\"", self.query)
        } else {
            format!(
                "Found {} recipes in {} categories",
                self.total(),
                self.matches.len()
            )
        }
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Curries & Gravies",
        &[
            "Mutton Kuzhambu",
            "Nandu Kuzhambu (Crab Curry)",
            "Meen Kuzhambu (Fish Curry)",
            "Kozhi Milagu Kuzhambu (Pepper Chicken Curry)",
            "Vatha Kuzhambu",
            "Kara Kuzhambu",
            "Puli Kuzhambu",
            "Mor Kuzhambu (Curd Curry)",
            "Kadalai Kuzhambu (Chickpea Curry)",
            "Karakozhambu",
            "Chettinad Chicken Curry",
            "Chettinad Mutton Curry",
            "Fish Molee",
            "Prawn Curry",
            "Egg Curry",
            "Vendakkai Puli Kuzhambu",
            "Karuvattu Kuzhambu",
            "Mullangi Sambar",
            "Kara Kozhambu",
            "Paruppu Urundai Kuzhambu",
        ],
    ),
    (
        "Varuval (Fry Items)",
        &["Fish Varuval", "Chicken Varuval", "Mutton Varuval"],
    ),
    (
        "Desserts & Sweets",
        &[
            "Chocolate Chip Cookies",
            "Mysore Pak",
            "Jangiri",
            "Paal Payasam",
            "Semiya Payasam",
            "Rava Kesari",
            "Adhirasam",
            "Nei Appam",
            "Poli (Paruppu Poli)",
            "Coconut Poli",
            "Boondi Laddu",
            "Ellu Urundai (Sesame Balls)",
            "Pori Urundai",
            "Kadalai Urundai (Peanut Balls)",
            "Coconut Burfi",
            "Milk Kova",
            "Thattai",
            "Seedai (Uppu Seedai & Vella Seedai)",
            "Mixture",
            "Gulab Jamun",
            "Rasagulla",
            "Aval Payasam",
            "Kasi Halwa (Poosanikai Halwa)",
            "Ashoka Halwa (Thiruvaiyaru special)",
            "Karupatti Halwa (Palm Jaggery Halwa)",
            "Thengai Burfi",
            "Akkaravadisal",
            "Tirunelveli Halwa",
            "Carrot Halwa",
            "Kesari",
        ],
    ),
    (
        "Breakfast",
        &[
            "Idli",
            "Dosa",
            "Vada (Medu Vada)",
            "Masala Dosa",
            "Rava Dosa",
            "Onion Uthappam",
            "Kal Dosa",
            "Kari Dosa (Madurai special)",
            "Appam",
            "Idiappam (String Hoppers)",
            "Puttu (Rice Puttu)",
            "Adai (Lentil Crepe)",
            "Kuzhi Paniyaram",
            "Upma (Rava Upma)",
            "Poori with Potato Masala",
            "Chapati with Kurma",
            "Parotta (Tamil style)",
            "Kothu Parotta",
            "Mutta Parotta (Egg Parotta)",
            "Ragi Dosa",
            "Pesarattu",
            "Wheat Rava Upma",
            "Potato Bonda",
        ],
    ),
    (
        "Snacks",
        &[
            "Murukku",
            "Thattai",
            "Seedai (Uppu Seedai & Vella Seedai)",
            "Mixture",
            "Vazhaipoo Vadai (Banana Flower Vada)",
            "Pakoda",
            "Onion Bajji",
            "Milagai Bajji (Chili Bajji)",
            "Vazhakkai Bajji (Banana Bajji)",
            "Sundal (Navaratri special)",
            "Masala Vadai",
            "Paruppu Vadai",
            "Samosa (Tamil style)",
            "Kaara Sev",
            "Paniyaram (Sweet/Spicy)",
            "Thenkuzhal",
            "Ribbon Pakoda",
            "Kai Murukku",
            "Banana Chips",
            "Banana Bajji",
            "Onion Pakoda",
        ],
    ),
    (
        "Vegetable Side Dishes",
        &[
            "Beans Poriyal",
            "Vazhaikkai Varuval (Raw Banana Fry)",
            "Kathirikai Varuval (Brinjal Fry)",
            "Vendakkai Poriyal (Ladies Finger Fry)",
            "Keerai Kootu (Spinach Kootu)",
            "Cabbage Poriyal",
            "Carrot Poriyal",
            "Potato Poriyal",
            "Drumstick Poriyal",
            "Poricha Kootu",
            "Keerai Molagootal",
            "Arai Keerai Masiyal",
            "Pumpkin Kootu",
            "Aviyal",
        ],
    ),
    (
        "Soups & Drinks",
        &[
            "Jigarthanda",
            "Filter Coffee",
            "Paruthi Paal (Cotton Seed Milk)",
            "Sukku Coffee (Dry Ginger Coffee)",
            "Panakam (Jaggery Drink)",
            "Kambu Koozh",
            "Kollu Rasam",
            "Neer More",
            "Murungai Keerai Soup",
            "Masala Chai",
        ],
    ),
    (
        "Chutneys & Pickles",
        &[
            "Coconut Chutney",
            "Tomato Chutney",
            "Mint Chutney",
            "Peanut Chutney",
            "Ginger Chutney",
            "Mango Pickle",
            "Lemon Pickle",
            "Garlic Pickle",
            "Mixed Vegetable Pickle",
            "Fish Pickle",
            "Chicken Pickle",
            "Mutton Pickle",
        ],
    ),
    (
        "Rice Dishes & Staples",
        &[
            "Sambar",
            "Rasam",
            "Curd Rice (Thayir Sadam)",
            "Lemon Rice",
            "Vegetable Biryani",
            "Tamarind Rice (Puli Sadam)",
            "Coconut Rice",
            "Pongal (Ven Pongal)",
            "Tomato Rice",
            "Chicken Biryani",
            "Mutton Biryani",
            "Fish Biryani",
            "Curd Semiya",
            "Sweet Pongal (Sakkarai Pongal)",
            "Arisi Upma",
            "Kuthiraivali Upma (Barnyard Millet)",
            "Varagu Upma (Kodo Millet)",
            "Thinai Pongal (Foxtail Millet Pongal)",
            "Bisibele Bath",
            "Rava Kichadi",
            "Ellu Sadam",
        ],
    ),
    (
        "International",
        &[
            "Creamy Pasta Delight",
            "Creamy Fettuccine",
            "Spicy Grilled Chicken",
            "Creamy Butter Chicken",
            "Spiced Rice Bowl",
            "Caesar Salad",
            "Beef Tacos",
            "Greek Salad",
            "Grilled Salmon",
            "Quinoa Buddha Bowl",
            "Christmas Turkey",
            "Pumpkin Spice Latte",
            "Avocado Toast",
        ],
    ),
];
