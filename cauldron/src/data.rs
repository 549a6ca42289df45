use anyhow::{Context, Result};
use common::{dish::DishBook, ingredient::IngredientList};
use kitchen::{Catalog, KitchenConfig, RecipeBook};
use std::path::Path;
use tracing::info;

const INGREDIENTS: &str = include_str!("../data/ingredients.json");
const DISHES: &str = include_str!("../data/dishes.json");

pub fn catalog() -> Result<Catalog> {
    let list: IngredientList =
        serde_json::from_str(INGREDIENTS).context("Embedded ingredient list is malformed")?;
    Ok(Catalog::from_list(list)?)
}

pub fn recipes() -> Result<RecipeBook> {
    let book: DishBook = serde_json::from_str(DISHES).context("Embedded dish book is malformed")?;
    Ok(RecipeBook::try_from(book)?)
}

/// Patches the catalog with ingredients loaded from `path`.
pub fn apply_overrides(catalog: &mut Catalog, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ingredient overrides from {}", path.display()))?;
    let loaded: IngredientList = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse ingredient overrides in {}", path.display()))?;

    let patched = catalog.apply_overrides(&loaded.ingredient_items);
    info!(
        "Ingredients loaded from {} ({} of {} matched)",
        path.display(),
        patched,
        loaded.ingredient_items.len()
    );
    Ok(())
}

pub fn config(path: Option<&Path>) -> Result<KitchenConfig> {
    let Some(path) = path else {
        return Ok(KitchenConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config in {}", path.display()))
}
