use crate::model::{Difficulty, Ingredient, Recipe};

struct Sample {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    category: &'static str,
    cooking_time: u32,
    servings: u32,
    difficulty: Difficulty,
    rating: f64,
    ingredients: &'static [(&'static str, &'static str, &'static str)],
    instructions: &'static [&'static str],
}

impl Sample {
    fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            image: self.image.to_string(),
            category: self.category.to_string(),
            cooking_time: self.cooking_time,
            servings: self.servings,
            ingredients: self
                .ingredients
                .iter()
                .enumerate()
                .map(|(i, (name, amount, unit))| {
                    Ingredient::new((i + 1).to_string(), *name, *amount, *unit)
                })
                .collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            difficulty: self.difficulty,
            rating: self.rating,
        }
    }
}

/// Built-in recipes shown when no data source answers
pub fn sample_recipes() -> Vec<Recipe> {
    SAMPLES.iter().map(Sample::to_recipe).collect()
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        title: "Gourmet Snack Mix",
        image: "/images/snack-3.webp",
        category: "Snacks",
        cooking_time: 5,
        servings: 4,
        difficulty: Difficulty::Easy,
        rating: 4.4,
        ingredients: &[
            ("Premium nuts", "150", "g"),
            ("Artisan crackers", "100", "g"),
            ("Dried berries", "80", "g"),
            ("Dark chocolate", "50", "g"),
        ],
        instructions: &[
            "Select premium ingredients",
            "Arrange in elegant portions",
            "Add chocolate pieces",
            "Present on serving board",
            "Enjoy with friends",
        ],
    },
    Sample {
        id: "2",
        title: "Classic Snack Platter",
        image: "/images/snack-1.webp",
        category: "Snacks",
        cooking_time: 10,
        servings: 6,
        difficulty: Difficulty::Easy,
        rating: 4.3,
        ingredients: &[
            ("Mixed nuts", "200", "g"),
            ("Crackers", "150", "g"),
            ("Dried fruits", "100", "g"),
            ("Cheese cubes", "100", "g"),
        ],
        instructions: &[
            "Arrange nuts in small bowls",
            "Place crackers on serving plate",
            "Add dried fruits and cheese",
            "Garnish with fresh herbs",
            "Serve immediately",
        ],
    },
    Sample {
        id: "3",
        title: "Traditional Snacks",
        image: "/images/snack.jpg",
        category: "Snacks",
        cooking_time: 15,
        servings: 8,
        difficulty: Difficulty::Easy,
        rating: 4.2,
        ingredients: &[
            ("Roasted nuts", "250", "g"),
            ("Savory bites", "200", "g"),
            ("Spiced mix", "150", "g"),
            ("Crunchy treats", "100", "g"),
        ],
        instructions: &[
            "Prepare traditional snack mix",
            "Combine all ingredients",
            "Season with spices",
            "Mix well and serve",
            "Store in airtight container",
        ],
    },
    Sample {
        id: "4",
        title: "Grilled Meat Deluxe",
        image: "/images/non-veg-3.webp",
        category: "Meat & Seafood",
        cooking_time: 35,
        servings: 4,
        difficulty: Difficulty::Medium,
        rating: 4.8,
        ingredients: &[
            ("Premium meat cuts", "800", "g"),
            ("Special marinade", "200", "ml"),
            ("Herb blend", "3", "tbsp"),
            ("Olive oil", "4", "tbsp"),
        ],
        instructions: &[
            "Marinate meat for 3 hours",
            "Preheat grill to high heat",
            "Grill meat to perfection",
            "Check internal temperature",
            "Let rest and serve hot",
        ],
    },
    Sample {
        id: "5",
        title: "Seafood Meat Combo",
        image: "/images/non-veg-2.webp",
        category: "Meat & Seafood",
        cooking_time: 30,
        servings: 4,
        difficulty: Difficulty::Medium,
        rating: 4.7,
        ingredients: &[
            ("Mixed seafood", "600", "g"),
            ("Meat selection", "400", "g"),
            ("Garlic butter", "100", "g"),
            ("Fresh herbs", "2", "tbsp"),
        ],
        instructions: &[
            "Prepare seafood and meat",
            "Heat garlic butter in pan",
            "Cook seafood first",
            "Add meat and herbs",
            "Serve with lemon wedges",
        ],
    },
    Sample {
        id: "6",
        title: "Classic Meat Platter",
        image: "/images/non-veg.webp",
        category: "Meat & Seafood",
        cooking_time: 25,
        servings: 4,
        difficulty: Difficulty::Medium,
        rating: 4.6,
        ingredients: &[
            ("Chicken breast", "600", "g"),
            ("Beef strips", "400", "g"),
            ("Marinade sauce", "150", "ml"),
            ("Spice mix", "2", "tbsp"),
        ],
        instructions: &[
            "Cut meat into portions",
            "Apply marinade evenly",
            "Let marinate for 1 hour",
            "Grill until cooked through",
            "Serve with vegetables",
        ],
    },
    Sample {
        id: "7",
        title: "Fresh Vegetable Bowl",
        image: "/images/veg-1.webp",
        category: "Vegetarian",
        cooking_time: 20,
        servings: 3,
        difficulty: Difficulty::Easy,
        rating: 4.5,
        ingredients: &[
            ("Fresh vegetables", "500", "g"),
            ("Quinoa", "200", "g"),
            ("Avocado", "1", "large"),
            ("Lemon dressing", "3", "tbsp"),
        ],
        instructions: &[
            "Cook quinoa until fluffy",
            "Chop fresh vegetables",
            "Slice avocado",
            "Arrange in bowl",
            "Drizzle with dressing",
        ],
    },
    Sample {
        id: "8",
        title: "Garden Fresh Salad",
        image: "/images/veg-food.webp",
        category: "Vegetarian",
        cooking_time: 15,
        servings: 4,
        difficulty: Difficulty::Easy,
        rating: 4.4,
        ingredients: &[
            ("Mixed greens", "400", "g"),
            ("Cherry tomatoes", "200", "g"),
            ("Cucumber", "1", "large"),
            ("Olive oil dressing", "4", "tbsp"),
        ],
        instructions: &[
            "Wash all vegetables thoroughly",
            "Cut vegetables into bite sizes",
            "Mix in large salad bowl",
            "Add dressing and toss",
            "Serve immediately",
        ],
    },
];
