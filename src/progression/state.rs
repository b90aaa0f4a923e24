use serde::{Deserialize, Serialize};

use super::growth::GrowthCurve;

/// EXP and level counters for one player.
///
/// Fields are read-only outside the crate; [`super::ExpManager`] is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub(crate) current_exp: u32,
    pub(crate) level: u32,
    pub(crate) exp_to_next_level: u32,
}

impl ProgressionState {
    /// Fresh level 1 state for the given curve
    pub fn new(curve: &GrowthCurve) -> Self {
        Self {
            current_exp: 0,
            level: 1,
            exp_to_next_level: curve.exp_for_level(1),
        }
    }

    /// EXP accumulated toward the next level
    pub fn current_exp(&self) -> u32 {
        self.current_exp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Threshold for the current level
    pub fn exp_to_next_level(&self) -> u32 {
        self.exp_to_next_level
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new(&GrowthCurve::default())
    }
}
