use clap::{Parser, Subcommand};
use log::debug;

use recipe_catalog::{CatalogConfig, CatalogError, CatalogView, RecipeFilter};

#[derive(Parser, Debug)]
#[command(name = "recipe-catalog", version, about = "Browse and filter a recipe catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List recipes, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        /// Maximum preparation time in minutes
        #[arg(long)]
        max_time: Option<u32>,
        #[arg(long)]
        ingredient: Option<String>,
        /// Only show favorites
        #[arg(long)]
        favorites: bool,
        /// Print the matching recipes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the full description of a recipe
    Show { name: String },
    /// List the distinct categories
    Categories,
    /// Print the whole catalog as JSON
    Export {
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CatalogError> {
    let config = CatalogConfig::load()?;
    debug!("{:#?}", config);

    let mut view = CatalogView::with_filter(config.build_catalog(), config.initial_filter());

    match command {
        Command::List {
            category,
            difficulty,
            max_time,
            ingredient,
            favorites,
            json,
        } => {
            let filter = build_filter(category, difficulty, max_time, ingredient, favorites);
            if !filter.is_empty() {
                view.set_filter(filter);
            }

            if json {
                let recipes: Vec<_> = view.visible().into_iter().map(|r| r.to_json()).collect();
                let output = if config.pretty_json {
                    serde_json::to_string_pretty(&recipes)?
                } else {
                    serde_json::to_string(&recipes)?
                };
                println!("{}", output);
            } else {
                print!("{}", view.render_list());
            }
        }
        Command::Show { name } => match view.select(&name) {
            Some(recipe) => println!("{}", recipe.describe()),
            None => return Err(CatalogError::NotFound(name)),
        },
        Command::Categories => {
            for category in view.catalog().all_categories() {
                println!("{}", category);
            }
        }
        Command::Export { compact } => {
            let pretty = config.pretty_json && !compact;
            println!("{}", view.catalog().to_json_string(pretty)?);
        }
    }

    Ok(())
}

fn build_filter(
    category: Option<String>,
    difficulty: Option<String>,
    max_time: Option<u32>,
    ingredient: Option<String>,
    favorites: bool,
) -> RecipeFilter {
    let mut filter = RecipeFilter::new();
    if let Some(category) = category {
        filter = filter.category(category);
    }
    if let Some(difficulty) = difficulty {
        filter = filter.difficulty(difficulty);
    }
    if let Some(max_time) = max_time {
        filter = filter.max_time(max_time);
    }
    if let Some(ingredient) = ingredient {
        filter = filter.ingredient(ingredient);
    }
    if favorites {
        filter = filter.favorites();
    }
    filter
}
