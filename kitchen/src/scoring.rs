//! Dish scoring and exhaustive combination ranking.
//!
//! A dish's score is built per ingredient type: the type's count times its per-unit score, boosted
//! by a quantity multiplier (pairs double, triples gain half, quadruples a quarter). A dish made
//! only of distinct types is doubled instead. The running total is kept as `f64` and truncated
//! toward zero at the very end.

use crate::catalog::Catalog;
use common::ingredient::{Ingredient, IngredientDefinition, IngredientType};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationError {
    #[error("Combination size must not be negative, got {0}")]
    InvalidArgument(isize),
}

/// All ingredients of one type within a multiset.
#[derive(Debug, Clone, Copy)]
pub struct Group<'a, T> {
    pub kind: IngredientType,
    pub count: usize,
    /// First ingredient of this type, in input order. Its name and score stand for the group.
    pub first: &'a T,
}

/// Groups by type, largest group first. Equal sizes keep first-occurrence order.
pub fn group_by_type<T: Ingredient>(ingredients: &[T]) -> Vec<Group<'_, T>> {
    let mut groups: Vec<Group<'_, T>> = Vec::new();
    for ingredient in ingredients {
        match groups.iter_mut().find(|group| group.kind == ingredient.kind()) {
            Some(group) => group.count += 1,
            None => groups.push(Group {
                kind: ingredient.kind(),
                count: 1,
                first: ingredient,
            }),
        }
    }

    // sort_by is stable
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

pub fn multiplier(count: usize) -> f64 {
    match count {
        2 => 2.0,
        3 => 1.5,
        4 => 1.25,
        _ => 1.0,
    }
}

pub fn compute_score<T: Ingredient>(ingredients: &[T]) -> u64 {
    let groups = group_by_type(ingredients);

    let mut total: f64 = groups
        .iter()
        .map(|group| {
            let add_score = group.count as f64 * f64::from(group.first.score());
            add_score * multiplier(group.count)
        })
        .sum();

    if !groups.iter().any(|group| group.count > 1) {
        total *= 2.0;
    }

    // Truncates toward zero
    total as u64
}

/// One `"{count} {name}"` line per type, largest group first.
pub fn summarize<T: Ingredient>(ingredients: &[T]) -> Vec<String> {
    group_by_type(ingredients)
        .iter()
        .map(|group| format!("{} {}", group.count, group.first.name()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a, T> {
    pub ingredients: Vec<&'a T>,
    pub score: u64,
}

impl<'a, T: Ingredient> Combination<'a, T> {
    pub fn new(ingredients: Vec<&'a T>) -> Self {
        let score = compute_score(&ingredients);
        Self { ingredients, score }
    }

    pub fn summary(&self) -> Vec<String> {
        summarize(&self.ingredients)
    }
}

/// Every multiset of `size` ingredients drawn from `items`, with repeats.
///
/// Positions are picked in non-decreasing order, so each multiset shows up once. A size of zero
/// yields a single empty combination.
pub fn generate_combinations<T: Ingredient>(
    items: &[T],
    size: isize,
) -> Result<Vec<Combination<'_, T>>, CombinationError> {
    let size = usize::try_from(size).map_err(|_| CombinationError::InvalidArgument(size))?;

    // No items, no non-empty combinations
    if items.is_empty() && size > 0 {
        return Ok(Vec::new());
    }

    let mut combinations = Vec::new();
    let mut current = Vec::new();
    generate_recursive(items, &mut current, size, 0, &mut combinations);
    Ok(combinations)
}

fn generate_recursive<'a, T: Ingredient>(
    items: &'a [T],
    current: &mut Vec<&'a T>,
    size: usize,
    position: usize,
    combinations: &mut Vec<Combination<'a, T>>,
) {
    if current.len() == size {
        combinations.push(Combination::new(current.clone()));
        return;
    }

    for (i, item) in items.iter().enumerate().skip(position) {
        current.push(item);
        generate_recursive(items, current, size, i, combinations);
        current.pop();
    }
}

/// Orders by score, best first. Equal scores keep their relative order.
pub fn rank_combinations<T>(mut combinations: Vec<Combination<'_, T>>) -> Vec<Combination<'_, T>> {
    combinations.sort_by(|a, b| b.score.cmp(&a.score));
    combinations
}

/// Ranks every combination of `size` catalog ingredients, generated in registration order.
pub fn rank_catalog(
    catalog: &Catalog,
    size: isize,
) -> Result<Vec<Combination<'_, IngredientDefinition>>, CombinationError> {
    Ok(rank_combinations(generate_combinations(catalog.definitions(), size)?))
}
