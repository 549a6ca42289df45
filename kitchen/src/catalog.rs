use common::ingredient::{IngredientDefinition, IngredientList, IngredientType};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Ingredient id '{0}' is registered more than once")]
    DuplicateId(String),
    #[error("No ingredient with id '{0}' in the catalog")]
    IdNotFound(String),
    #[error("Ingredient type '{0}' is not specified in the catalog")]
    TypeNotFound(IngredientType),
}

/// Registry of every known ingredient, indexed by id and by type.
///
/// Only one definition per type is reachable through [`Catalog::find_by_type`]: when the source
/// data carries several, the one registered first wins.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    definitions: Vec<IngredientDefinition>,
    by_id: HashMap<String, usize>,
    by_type: HashMap<IngredientType, usize>,
}

impl Catalog {
    pub fn load<I>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = IngredientDefinition>,
    {
        let definitions = definitions.into_iter().collect::<Vec<IngredientDefinition>>();

        let mut by_id = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if by_id.insert(definition.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(definition.id.clone()));
            }
        }

        let mut catalog = Self {
            definitions,
            by_id,
            by_type: HashMap::new(),
        };
        catalog.index_types();

        info!("Loaded {} ingredients", catalog.len());
        Ok(catalog)
    }

    pub fn from_list(list: IngredientList) -> Result<Self, CatalogError> {
        Self::load(list.ingredient_items)
    }

    fn index_types(&mut self) {
        self.by_type.clear();
        for (index, definition) in self.definitions.iter().enumerate() {
            self.by_type.entry(definition.kind).or_insert(index);
        }
    }

    pub fn get(&self, id: &str) -> Result<&IngredientDefinition, CatalogError> {
        self.by_id
            .get(id)
            .map(|&index| &self.definitions[index])
            .ok_or_else(|| CatalogError::IdNotFound(id.to_owned()))
    }

    pub fn find_by_type(&self, kind: IngredientType) -> Result<&IngredientDefinition, CatalogError> {
        self.by_type
            .get(&kind)
            .map(|&index| &self.definitions[index])
            .ok_or(CatalogError::TypeNotFound(kind))
    }

    /// Patches local definitions with externally loaded ones, matched by id.
    ///
    /// Loaded items without a local counterpart are skipped. Returns the number of definitions
    /// that were patched.
    pub fn apply_overrides<'a, I>(&mut self, loaded: I) -> usize
    where
        I: IntoIterator<Item = &'a IngredientDefinition>,
    {
        let mut patched = 0;
        for item in loaded {
            let Some(&index) = self.by_id.get(&item.id) else {
                debug!("Ignoring override for unknown ingredient '{}'", item.id);
                continue;
            };

            self.definitions[index].override_with(item);
            patched += 1;
        }

        // An override may move a definition to another type
        self.index_types();

        if patched > 0 {
            info!("Overrode {} ingredients from loaded values", patched);
        }
        patched
    }

    pub fn definitions(&self) -> &[IngredientDefinition] {
        &self.definitions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientDefinition> {
        self.definitions.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.definitions.iter().map(|definition| definition.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a IngredientDefinition;
    type IntoIter = std::slice::Iter<'a, IngredientDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
