use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CAPACITY: usize = 3;
pub const DEFAULT_RESET_DELAY_MS: u64 = 2300;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct KitchenConfig {
    /// Ingredients needed to cook a dish.
    pub capacity: usize,
    /// How long a cooked dish stays in the cauldron before it is emptied.
    pub reset_delay_ms: u64,
    /// Size of the combinations listed by the combination report. Defaults to `capacity`.
    pub combination_size: Option<usize>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            combination_size: None,
        }
    }
}

impl KitchenConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn combination_size(&self) -> usize {
        self.combination_size.unwrap_or(self.capacity)
    }
}
