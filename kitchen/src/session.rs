use crate::{
    catalog::{Catalog, CatalogError},
    recipe::RecipeBook,
    scoring,
};
use common::ingredient::{IngredientDefinition, IngredientType};
use tracing::{debug, info, warn};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cauldron capacity must be at least one")]
    ZeroCapacity,
    #[error("Cauldron already holds {0} ingredients")]
    VesselFull(usize),
    #[error("Cauldron holds {filled} of {capacity} ingredients")]
    NotFull { filled: usize, capacity: usize },
    #[error("Dish has already been cooked")]
    AlreadyResolved,
    #[error("Catalog lookup failed")]
    Catalog(#[from] CatalogError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Filling,
    Resolved,
}

/// What came out of the cauldron.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishReport {
    pub score: u64,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl std::fmt::Display for DishReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (+{})", self.name, self.score)
    }
}

/// Receives session notifications. UI, animation and persistence hang off this.
pub trait SessionSink {
    fn on_ingredient_added(&mut self, _ingredient: &IngredientDefinition, _filled: usize, _capacity: usize) {}
    fn on_dish_resolved(&mut self, _dish: &DishReport) {}
}

/// A single cauldron. Collects ingredients until it is full, then cooks them.
///
/// Cooking happens synchronously inside [`CookingSession::add`]; emptying the cauldron afterwards
/// is left to the caller through [`CookingSession::reset`] so it can pick the timing.
pub struct CookingSession<'a> {
    catalog: &'a Catalog,
    recipes: &'a RecipeBook,
    capacity: usize,
    contents: Vec<&'a IngredientDefinition>,
    dish: Option<DishReport>,
    sinks: Vec<Box<dyn SessionSink + 'a>>,
}

impl<'a> CookingSession<'a> {
    pub fn new(catalog: &'a Catalog, recipes: &'a RecipeBook, capacity: usize) -> Result<Self, SessionError> {
        if capacity == 0 {
            return Err(SessionError::ZeroCapacity);
        }

        Ok(Self {
            catalog,
            recipes,
            capacity,
            contents: Vec::with_capacity(capacity),
            dish: None,
            sinks: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, sink: Box<dyn SessionSink + 'a>) {
        self.sinks.push(sink)
    }

    pub fn state(&self) -> SessionState {
        if self.dish.is_some() {
            SessionState::Resolved
        } else if self.contents.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Filling
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contents(&self) -> &[&'a IngredientDefinition] {
        &self.contents
    }

    pub fn is_full(&self) -> bool {
        self.contents.len() >= self.capacity
    }

    /// The dish cooked from the current contents, until the next reset.
    pub fn dish(&self) -> Option<&DishReport> {
        self.dish.as_ref()
    }

    /// Drops an ingredient into the cauldron, cooking it when this fills the cauldron.
    ///
    /// Returns the cooked dish when this ingredient completed it.
    pub fn add(&mut self, ingredient: &'a IngredientDefinition) -> Result<Option<&DishReport>, SessionError> {
        if self.is_full() {
            warn!("Tried to add {} to a full cauldron", ingredient.name);
            return Err(SessionError::VesselFull(self.contents.len()));
        }

        self.contents.push(ingredient);
        let filled = self.contents.len();
        let capacity = self.capacity;
        debug!("Added {} ({}/{})", ingredient.name, filled, capacity);

        self.sinks
            .iter_mut()
            .for_each(|sink| sink.on_ingredient_added(ingredient, filled, capacity));

        if !self.is_full() {
            return Ok(None);
        }

        self.resolve().map(Some)
    }

    /// Looks the ingredient type up in the catalog and adds it.
    pub fn add_by_type(&mut self, kind: IngredientType) -> Result<Option<&DishReport>, SessionError> {
        let catalog = self.catalog;
        let ingredient = match catalog.find_by_type(kind) {
            Ok(ingredient) => ingredient,
            Err(e) => {
                debug!("{}", e);
                return Err(e.into());
            }
        };

        self.add(ingredient)
    }

    /// Scores the full cauldron, picks the dish and reports it to every sink.
    pub fn resolve(&mut self) -> Result<&DishReport, SessionError> {
        if self.dish.is_some() {
            return Err(SessionError::AlreadyResolved);
        }

        if !self.is_full() {
            return Err(SessionError::NotFull {
                filled: self.contents.len(),
                capacity: self.capacity,
            });
        }

        let dish = DishReport {
            score: scoring::compute_score(&self.contents),
            name: self.recipes.select(&self.contents).to_owned(),
            ingredients: scoring::summarize(&self.contents),
        };
        info!("Cooked {} from {}", dish, dish.ingredients.join(", "));

        self.sinks.iter_mut().for_each(|sink| sink.on_dish_resolved(&dish));

        Ok(&*self.dish.insert(dish))
    }

    /// Empties the cauldron.
    pub fn reset(&mut self) {
        self.contents.clear();
        self.dish = None;
    }
}
