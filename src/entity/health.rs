use serde::{Deserialize, Serialize};

/// Hit points of an entity, in whole hearts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    /// Create a new health component at full health
    pub fn new(max: u32) -> Self {
        Health { current: max, max }
    }

    /// Restore health to max
    pub fn heal_full(&mut self) {
        self.current = self.max;
    }

    /// Raise max health and heal to the new max.
    /// Returns the previous max.
    pub fn raise_max(&mut self, amount: u32) -> u32 {
        let old_max = self.max;
        self.max = self.max.saturating_add(amount);
        self.heal_full();
        old_max
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(5)
    }
}
