use common::{
    dish::{DishBook, DishEntry, RequiredIngredient},
    ingredient::{IngredientType, Typed},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Rule for {ingredient_type} has max {max} below min {min}")]
    InvalidRange {
        ingredient_type: IngredientType,
        min: u32,
        max: u32,
    },
}

/// Inclusive bounds on how many ingredients of one type a recipe accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecipeRule {
    ingredient_type: IngredientType,
    min_count: u32,
    max_count: u32,
}

impl RecipeRule {
    pub fn new(ingredient_type: IngredientType, min_count: u32, max_count: u32) -> Result<Self, RecipeError> {
        if max_count < min_count {
            return Err(RecipeError::InvalidRange {
                ingredient_type,
                min: min_count,
                max: max_count,
            });
        }

        Ok(Self {
            ingredient_type,
            min_count,
            max_count,
        })
    }

    pub fn ingredient_type(&self) -> IngredientType {
        self.ingredient_type
    }

    pub fn min_count(&self) -> u32 {
        self.min_count
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    pub fn holds<T: Typed>(&self, ingredients: &[T]) -> bool {
        let count = ingredients
            .iter()
            .filter(|ingredient| ingredient.kind() == self.ingredient_type)
            .count();

        (self.min_count as usize..=self.max_count as usize).contains(&count)
    }
}

impl TryFrom<RequiredIngredient> for RecipeRule {
    type Error = RecipeError;

    fn try_from(value: RequiredIngredient) -> Result<Self, Self::Error> {
        Self::new(value.ingredient_type, value.min_count, value.max_count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub rules: Vec<RecipeRule>,
}

impl Recipe {
    pub fn new(name: &str, rules: Vec<RecipeRule>) -> Self {
        Self {
            name: name.to_owned(),
            rules,
        }
    }

    /// True when every rule holds. A recipe without rules matches anything.
    pub fn matches<T: Typed>(&self, ingredients: &[T]) -> bool {
        self.rules.iter().all(|rule| rule.holds(ingredients))
    }
}

impl TryFrom<DishEntry> for Recipe {
    type Error = RecipeError;

    fn try_from(value: DishEntry) -> Result<Self, Self::Error> {
        let rules = value
            .required_ingredients
            .into_iter()
            .map(RecipeRule::try_from)
            .collect::<Result<Vec<RecipeRule>, RecipeError>>()?;

        Ok(Self {
            name: value.name,
            rules,
        })
    }
}

/// Ordered dishes plus the name used when none of them match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    default_name: String,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>, default_name: &str) -> Self {
        Self {
            recipes,
            default_name: default_name.to_owned(),
        }
    }

    /// Picks the first recipe in book order whose rules all hold.
    pub fn select<T: Typed>(&self, ingredients: &[T]) -> &str {
        self.recipes
            .iter()
            .find(|recipe| recipe.matches(ingredients))
            .map_or(self.default_name.as_str(), |recipe| recipe.name.as_str())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }
}

impl TryFrom<DishBook> for RecipeBook {
    type Error = RecipeError;

    fn try_from(value: DishBook) -> Result<Self, Self::Error> {
        let recipes = value
            .dishes
            .into_iter()
            .map(Recipe::try_from)
            .collect::<Result<Vec<Recipe>, RecipeError>>()?;

        Ok(Self {
            recipes,
            default_name: value.default_dish_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stew_book() -> RecipeBook {
        RecipeBook::new(
            vec![Recipe::new(
                "Stew",
                vec![RecipeRule::new(IngredientType::Potato, 1, 4).unwrap()],
            )],
            "Mystery Mix",
        )
    }

    #[test]
    fn selects_matching_recipe_or_default() {
        let book = stew_book();

        assert_eq!(book.select(&[IngredientType::Potato]), "Stew");
        assert_eq!(book.select(&[IngredientType::Onion]), "Mystery Mix");
        assert_eq!(book.select::<IngredientType>(&[]), "Mystery Mix");
    }

    #[test]
    fn bounds_are_inclusive() {
        let rule = RecipeRule::new(IngredientType::Carrot, 2, 3).unwrap();

        assert!(!rule.holds(&[IngredientType::Carrot]));
        assert!(rule.holds(&[IngredientType::Carrot; 2]));
        assert!(rule.holds(&[IngredientType::Carrot; 3]));
        assert!(!rule.holds(&[IngredientType::Carrot; 4]));
    }

    #[test]
    fn zero_minimum_rules_hold_for_absent_types() {
        let rule = RecipeRule::new(IngredientType::Meat, 0, 0).unwrap();

        assert!(rule.holds(&[IngredientType::Potato]));
        assert!(!rule.holds(&[IngredientType::Meat]));
    }

    #[test]
    fn earlier_recipe_masks_later_one() {
        let book = RecipeBook::new(
            vec![
                Recipe::new(
                    "Mash",
                    vec![RecipeRule::new(IngredientType::Potato, 1, 3).unwrap()],
                ),
                Recipe::new(
                    "Hotpot",
                    vec![
                        RecipeRule::new(IngredientType::Potato, 1, 3).unwrap(),
                        RecipeRule::new(IngredientType::Meat, 1, 3).unwrap(),
                    ],
                ),
            ],
            "Mystery Mix",
        );

        assert_eq!(
            book.select(&[IngredientType::Potato, IngredientType::Meat]),
            "Mash"
        );
    }

    #[test]
    fn recipe_without_rules_always_matches() {
        let book = RecipeBook::new(vec![Recipe::new("Soup", Vec::new())], "Mystery Mix");
        assert_eq!(book.select(&[IngredientType::Pepper]), "Soup");
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            RecipeRule::new(IngredientType::Onion, 3, 1),
            Err(RecipeError::InvalidRange {
                ingredient_type: IngredientType::Onion,
                min: 3,
                max: 1
            })
        );
    }

    #[test]
    fn converts_dish_book() {
        let book = DishBook {
            dishes: vec![DishEntry {
                name: "Stew".to_owned(),
                required_ingredients: vec![RequiredIngredient {
                    ingredient_type: IngredientType::Potato,
                    min_count: 1,
                    max_count: 4,
                }],
            }],
            default_dish_name: "Mystery Mix".to_owned(),
        };

        assert_eq!(RecipeBook::try_from(book), Ok(stew_book()));
    }
}
