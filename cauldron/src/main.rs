#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

mod data;
mod save;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::{
    dish::PlayerData,
    ingredient::{IngredientDefinition, IngredientType},
};
use kitchen::{
    scoring, Catalog, Combination, CookingSession, DishReport, KitchenConfig, LedgerSink, PlayerStats,
    RecipeBook, SessionSink, StatsObserver,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cauldron", version, about = "Cook dishes from ingredients and rank every combination")]
struct Cli {
    /// Kitchen config (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ingredient list whose entries override the built-in ingredients by id
    #[arg(long, global = true, value_name = "FILE")]
    overrides: Option<PathBuf>,

    /// Player save file
    #[arg(long, global = true, value_name = "FILE", default_value = save::DEFAULT_SAVE)]
    save: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every ingredient combination, best score first
    Combos {
        /// Ingredients per combination, defaults to the cauldron capacity
        #[arg(long)]
        size: Option<isize>,
    },
    /// Drop ingredients into the cauldron, cooking each time it fills up
    Cook {
        #[arg(required = true)]
        ingredients: Vec<IngredientType>,
    },
    /// Show score, best dish and last dish
    Stats,
    /// Delete the player's progress
    ResetStats,
}

struct Console;

impl SessionSink for Console {
    fn on_ingredient_added(&mut self, ingredient: &IngredientDefinition, filled: usize, capacity: usize) {
        println!("[{filled}/{capacity}] {}", ingredient.name);
    }

    fn on_dish_resolved(&mut self, dish: &DishReport) {
        println!("{dish} | {}", dish.ingredients.join(", "));
    }
}

struct StatsPanel;

impl StatsObserver for StatsPanel {
    fn notify(&self, data: &PlayerData) {
        debug!(
            "Score {} | best: {} | last: {}",
            data.score, data.best_dish, data.last_dish
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = data::config(cli.config.as_deref())?;

    let mut catalog = data::catalog()?;
    if let Some(path) = &cli.overrides {
        data::apply_overrides(&mut catalog, path)?;
    }
    let recipes = data::recipes()?;

    match cli.command {
        Command::Combos { size } => list_combinations(&catalog, &recipes, &config, size),
        Command::Cook { ingredients } => cook(&catalog, &recipes, &config, &cli.save, &ingredients),
        Command::Stats => {
            let data = save::load(&cli.save)?;
            print_stats(&data);
            Ok(())
        }
        Command::ResetStats => {
            let mut stats = PlayerStats::new(save::load(&cli.save)?);
            stats.reset();
            save::store(&cli.save, stats.data())
        }
    }
}

fn list_combinations(
    catalog: &Catalog,
    recipes: &RecipeBook,
    config: &KitchenConfig,
    size: Option<isize>,
) -> Result<()> {
    let size = match size {
        Some(size) => size,
        None => isize::try_from(config.combination_size())?,
    };

    let ranked = scoring::rank_catalog(catalog, size)?;
    info!("Generated {} combinations of {} ingredients", ranked.len(), size);

    for combination in &ranked {
        println!("{}", combination_line(combination, recipes));
    }

    Ok(())
}

/// `Score: 60 | Meat Stew | 2 potato, 1 meat`
fn combination_line(combination: &Combination<'_, IngredientDefinition>, recipes: &RecipeBook) -> String {
    let ingredients = combination
        .summary()
        .iter()
        .map(|line| line.to_lowercase())
        .collect::<Vec<String>>();

    format!(
        "Score: {} | {} | {}",
        combination.score,
        recipes.select(&combination.ingredients),
        ingredients.join(", ")
    )
}

fn cook(
    catalog: &Catalog,
    recipes: &RecipeBook,
    config: &KitchenConfig,
    save_path: &std::path::Path,
    ingredients: &[IngredientType],
) -> Result<()> {
    let mut stats = PlayerStats::new(save::load(save_path)?);
    stats.register(Box::new(StatsPanel));

    {
        let mut session = CookingSession::new(catalog, recipes, config.capacity)?;
        session.subscribe(Box::new(Console));
        session.subscribe(Box::new(LedgerSink::new(&mut stats)));

        for &kind in ingredients {
            match session.add_by_type(kind) {
                Ok(Some(_)) => {
                    std::thread::sleep(config.reset_delay());
                    session.reset();
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping {} due to {}", kind, e),
            }
        }

        if !session.contents().is_empty() {
            warn!(
                "{} of {} ingredients left in the cauldron",
                session.contents().len(),
                session.capacity()
            );
        }
    }

    save::store(save_path, stats.data())?;
    print_stats(stats.data());
    Ok(())
}

fn print_stats(data: &PlayerData) {
    println!("Score: {}", data.score);
    println!("Best dish: {}", data.best_dish);
    println!("Last dish: {}", data.last_dish);
}
