use crate::ingredient::IngredientType;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequiredIngredient {
    #[serde(rename = "ingredientType")]
    pub ingredient_type: IngredientType,
    #[serde(rename = "minIngredients", default)]
    pub min_count: u32,
    #[serde(rename = "maxIngredients")]
    pub max_count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DishEntry {
    pub name: String,
    #[serde(rename = "requiredIngredients", default)]
    pub required_ingredients: Vec<RequiredIngredient>,
}

/// Shape of the dish source data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DishBook {
    #[serde(default)]
    pub dishes: Vec<DishEntry>,
    #[serde(rename = "defaultDishName")]
    pub default_dish_name: String,
}

/// A dish as the save file remembers it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CookedDish {
    pub score: u64,
    pub name: String,
    pub ingredients: String,
}

impl CookedDish {
    pub fn new(score: u64, name: &str, ingredients: &[String]) -> Self {
        Self {
            score,
            name: name.to_owned(),
            ingredients: ingredients
                .iter()
                .map(|line| line.to_lowercase())
                .collect::<Vec<String>>()
                .join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn describe(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        format!("{} ({}) [{}]", self.name, self.ingredients, self.score)
    }
}

impl Display for CookedDish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Everything worth saving about a player.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerData {
    #[serde(default)]
    pub score: u64,
    #[serde(rename = "bestDishData", default)]
    pub best_dish: CookedDish,
    #[serde(rename = "lastDishData", default)]
    pub last_dish: CookedDish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_cooked_dish() {
        let dish = CookedDish::new(45, "Stew", &["2 Potato".to_owned(), "1 Onion".to_owned()]);
        assert_eq!(dish.describe(), "Stew (2 potato, 1 onion) [45]");
    }

    #[test]
    fn empty_dish_describes_as_nothing() {
        assert_eq!(CookedDish::default().describe(), "");
    }
}
