use crate::session::{DishReport, SessionSink};
use common::dish::{CookedDish, PlayerData};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DishSlot {
    Best,
    Last,
}

/// Where cooked dishes end up. The session only ever talks to this through [`LedgerSink`].
pub trait DishLedger {
    fn record_score(&mut self, delta: u64);
    fn record_dish(&mut self, slot: DishSlot, score: u64, name: &str, ingredients: &[String]);
    /// True when `candidate` would become the new best dish.
    fn is_better(&self, candidate: u64) -> bool;
}

pub trait StatsObserver {
    fn notify(&self, data: &PlayerData);
}

/// The player's running score plus their best and last dish.
#[derive(Default)]
pub struct PlayerStats {
    data: PlayerData,
    observers: Vec<Box<dyn StatsObserver>>,
}

impl PlayerStats {
    pub fn new(data: PlayerData) -> Self {
        Self {
            data,
            observers: Vec::new(),
        }
    }

    pub fn register(&mut self, observer: Box<dyn StatsObserver>) {
        observer.notify(&self.data);
        self.observers.push(observer)
    }

    pub fn data(&self) -> &PlayerData {
        &self.data
    }

    pub fn score(&self) -> u64 {
        self.data.score
    }

    pub fn best_dish(&self) -> &CookedDish {
        &self.data.best_dish
    }

    pub fn last_dish(&self) -> &CookedDish {
        &self.data.last_dish
    }

    /// Forgets everything, as a fresh save would.
    pub fn reset(&mut self) {
        self.run(|data| *data = PlayerData::default());
    }

    fn run<F: FnOnce(&mut PlayerData)>(&mut self, predicate: F) {
        predicate(&mut self.data);
        self.observers.iter().for_each(|observer| observer.notify(&self.data))
    }
}

impl DishLedger for PlayerStats {
    fn record_score(&mut self, delta: u64) {
        self.run(|data| data.score = data.score.saturating_add(delta));
    }

    fn record_dish(&mut self, slot: DishSlot, score: u64, name: &str, ingredients: &[String]) {
        let dish = CookedDish::new(score, name, ingredients);
        self.run(|data| match slot {
            DishSlot::Best => data.best_dish = dish,
            DishSlot::Last => data.last_dish = dish,
        });
    }

    fn is_better(&self, candidate: u64) -> bool {
        self.data.best_dish.is_empty() || candidate > self.data.best_dish.score
    }
}

impl<L: DishLedger + ?Sized> DishLedger for &mut L {
    fn record_score(&mut self, delta: u64) {
        (**self).record_score(delta)
    }

    fn record_dish(&mut self, slot: DishSlot, score: u64, name: &str, ingredients: &[String]) {
        (**self).record_dish(slot, score, name, ingredients)
    }

    fn is_better(&self, candidate: u64) -> bool {
        (**self).is_better(candidate)
    }
}

/// Feeds every cooked dish into a [`DishLedger`].
pub struct LedgerSink<L: DishLedger> {
    ledger: L,
}

impl<L: DishLedger> LedgerSink<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn into_inner(self) -> L {
        self.ledger
    }
}

impl<L: DishLedger> SessionSink for LedgerSink<L> {
    fn on_dish_resolved(&mut self, dish: &DishReport) {
        self.ledger.record_score(dish.score);

        if self.ledger.is_better(dish.score) {
            info!("New best dish: {}", dish);
            self.ledger
                .record_dish(DishSlot::Best, dish.score, &dish.name, &dish.ingredients);
        }

        self.ledger
            .record_dish(DishSlot::Last, dish.score, &dish.name, &dish.ingredients);
    }
}
