use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use recipe_browser::catalog::{CategoryPage, Detail, Listing, SearchResults, Variations};
use recipe_browser::{AppConfig, Recipe, RecipeBrowser, Suggestions};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all recipes, optionally filtered
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one page of a navigation category
    Category {
        name: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Recipes related to a category
    Variations { name: String },
    /// Show a recipe by id
    Show { id: String },
    /// Search recipes and remember the query
    Search { query: String },
    /// Suggest recipe names from the built-in categories
    Suggest { query: String },
    /// Open the recipe a suggested name refers to
    Open { name: String },
    /// Show recent searches
    History {
        #[arg(long)]
        clear: bool,
    },
    /// List suggestion categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = AppConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let mut browser = RecipeBrowser::builder().config(config).build().await?;

    match args.command {
        Command::List { search } => {
            let listing = browser.home(search.as_deref()).await;
            emit(args.json, &listing, print_listing)?;
        }
        Command::Category { name, page } => {
            let page = browser.category_page(&name, page).await;
            emit(args.json, &page, print_category_page)?;
        }
        Command::Variations { name } => {
            let variations = browser.variations(&name).await;
            emit(args.json, &variations, print_variations)?;
        }
        Command::Show { id } => {
            let detail = browser.recipe_detail(&id).await?;
            emit(args.json, &detail, print_detail)?;
        }
        Command::Search { query } => {
            let results = browser.search(&query).await?;
            emit(args.json, &results, print_search_results)?;
        }
        Command::Suggest { query } => {
            let suggestions = browser.suggest(&query);
            emit(args.json, &suggestions, print_suggestions)?;
        }
        Command::Open { name } => {
            let recipe = browser.open_suggestion(&name).await;
            let detail = match recipe {
                Some(recipe) => Detail::Found { recipe },
                None => Detail::NotFound { id: name },
            };
            emit(args.json, &detail, print_detail)?;
        }
        Command::History { clear } => {
            if clear {
                browser.clear_history().await?;
            }
            emit(args.json, &browser.recent_searches(), |entries: &&[String]| {
                if entries.is_empty() {
                    println!("No recent searches");
                }
                for entry in entries.iter() {
                    println!("{}", entry);
                }
            })?;
        }
        Command::Categories => {
            let categories: Vec<&str> = browser.catalog().taxonomy().categories().collect();
            emit(args.json, &categories, |categories: &Vec<&str>| {
                for category in categories {
                    println!("{}", category);
                }
            })?;
        }
    }

    Ok(())
}

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    print: impl FnOnce(&T),
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

fn print_recipe_line(recipe: &Recipe) {
    println!(
        "[{}] {} ({}, {} min, {}, {:.1}★)",
        recipe.id,
        recipe.title,
        recipe.category,
        recipe.cooking_time,
        recipe.difficulty,
        recipe.rating
    );
}

fn print_listing(listing: &Listing) {
    match listing {
        Listing::Loaded { recipes } if recipes.is_empty() => println!("No recipes found"),
        Listing::Loaded { recipes } => recipes.iter().for_each(print_recipe_line),
        Listing::Failed { message } => eprintln!("{}", message),
    }
}

fn print_category_page(page: &CategoryPage) {
    println!("{}", page.display_name);
    if let Some(stats) = &page.stats {
        println!(
            "{} recipes, avg rating {:.1}, avg {} min",
            stats.count, stats.average_rating, stats.average_cooking_time
        );
    }
    if let Some(error) = &page.error {
        eprintln!("{}", error);
    }
    page.recipes.iter().for_each(print_recipe_line);
    println!("Page {} of {}", page.page, page.total_pages);
}

fn print_variations(variations: &Variations) {
    println!("{} variations", variations.category);
    if let Some(error) = &variations.error {
        eprintln!("{}", error);
    }
    variations.recipes.iter().for_each(print_recipe_line);
}

fn print_detail(detail: &Detail) {
    match detail {
        Detail::Found { recipe } => {
            println!("{}", recipe.title);
            println!(
                "{} | {} min | serves {} | {} | {:.1}★",
                recipe.category,
                recipe.cooking_time,
                recipe.servings,
                recipe.difficulty,
                recipe.rating
            );
            println!("\nIngredients:");
            for ingredient in &recipe.ingredients {
                println!("  - {}", ingredient);
            }
            println!("\nInstructions:");
            for (step, instruction) in recipe.instructions.iter().enumerate() {
                println!("  {}. {}", step + 1, instruction);
            }
        }
        Detail::NotFound { .. } => println!("Recipe not found"),
    }
}

fn print_search_results(results: &SearchResults) {
    println!("{}", results.summary());
    results.recipes.iter().for_each(print_recipe_line);
}

fn print_suggestions(suggestions: &Suggestions) {
    if suggestions.query.trim().is_empty() {
        return;
    }
    println!("{}", suggestions.summary());
    for category in &suggestions.matches {
        println!("{}", category.category);
        for name in &category.recipes {
            println!("  {}", name);
        }
    }
}
