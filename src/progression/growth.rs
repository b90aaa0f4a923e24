use serde::{Deserialize, Serialize};

use crate::config::GrowthConfig;

/// Exponential EXP curve: `floor(base * rate^(level - 1))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    pub base: u32,
    pub rate: f64,
}

impl GrowthCurve {
    pub const fn new(base: u32, rate: f64) -> Self {
        Self { base, rate }
    }

    /// EXP needed to advance past `level`.
    ///
    /// Never returns 0 so a level always has a reachable, non-trivial threshold.
    /// Levels below 1 are treated as level 1.
    pub fn exp_for_level(&self, level: u32) -> u32 {
        let exponent = level.max(1) - 1;
        let raw = f64::from(self.base) * self.rate.powf(f64::from(exponent));
        // `as` saturates at u32::MAX for huge levels
        (raw.floor() as u32).max(1)
    }
}

impl Default for GrowthCurve {
    fn default() -> Self {
        Self::from(&GrowthConfig::default())
    }
}

impl From<&GrowthConfig> for GrowthCurve {
    fn from(config: &GrowthConfig) -> Self {
        Self::new(config.base, config.rate)
    }
}
