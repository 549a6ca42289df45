use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IngredientType {
    Potato,
    Pepper,
    Carrot,
    Onion,
    Meat,
}

impl IngredientType {
    pub const ALL: [Self; 5] = [
        Self::Potato,
        Self::Pepper,
        Self::Carrot,
        Self::Onion,
        Self::Meat,
    ];
}

impl Display for IngredientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Potato => "Potato",
                Self::Pepper => "Pepper",
                Self::Carrot => "Carrot",
                Self::Onion => "Onion",
                Self::Meat => "Meat",
            }
        )
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown ingredient type '{0}'")]
pub struct ParseIngredientTypeError(pub String);

impl FromStr for IngredientType {
    type Err = ParseIngredientTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseIngredientTypeError(s.to_owned()))
    }
}

/// Anything that carries an ingredient type, which is all recipe matching looks at.
pub trait Typed {
    fn kind(&self) -> IngredientType;
}

/// Anything that can be dropped into the cauldron and scored.
pub trait Ingredient: Typed {
    fn name(&self) -> &str;
    fn score(&self) -> u32;
}

impl Typed for IngredientType {
    fn kind(&self) -> IngredientType {
        *self
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn kind(&self) -> IngredientType {
        (**self).kind()
    }
}

impl<T: Ingredient + ?Sized> Ingredient for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self) -> u32 {
        (**self).score()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IngredientDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientType,
    #[serde(default)]
    pub score: u32,
}

impl IngredientDefinition {
    pub fn new(id: &str, name: &str, kind: IngredientType, score: u32) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            kind,
            score,
        }
    }

    /// Copies the patchable fields of `loaded` over this definition. The id is left alone.
    pub fn override_with(&mut self, loaded: &Self) {
        self.name = loaded.name.clone();
        self.score = loaded.score;
        self.kind = loaded.kind;
    }
}

impl Typed for IngredientDefinition {
    fn kind(&self) -> IngredientType {
        self.kind
    }
}

impl Ingredient for IngredientDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self) -> u32 {
        self.score
    }
}

impl Display for IngredientDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) +{}", self.name, self.kind, self.score)
    }
}

/// Shape of the ingredient source data, embedded or loaded as an override patch.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IngredientList {
    #[serde(rename = "ingredientItems", default)]
    pub ingredient_items: Vec<IngredientDefinition>,
}
