pub mod catalog;
pub mod config;
pub mod recipe;
pub mod scoring;
pub mod session;
pub mod stats;

pub use catalog::{Catalog, CatalogError};
pub use config::KitchenConfig;
pub use recipe::{Recipe, RecipeBook, RecipeError, RecipeRule};
pub use scoring::{compute_score, generate_combinations, rank_combinations, summarize, Combination, CombinationError};
pub use session::{CookingSession, DishReport, SessionError, SessionSink, SessionState};
pub use stats::{DishLedger, DishSlot, LedgerSink, PlayerStats, StatsObserver};
