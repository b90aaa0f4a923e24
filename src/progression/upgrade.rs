use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UpgradeError;
use crate::config::UpgradeConfig;
use crate::entity::PlayerStats;

/// Permanent stat upgrades offered on level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    Health,
    Damage,
    Speed,
}

impl UpgradeId {
    pub const ALL: [UpgradeId; 3] = [UpgradeId::Health, UpgradeId::Damage, UpgradeId::Speed];

    /// Lowercase name used in logs and by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            UpgradeId::Health => "health",
            UpgradeId::Damage => "damage",
            UpgradeId::Speed => "speed",
        }
    }

    /// Presentation metadata for this upgrade
    pub fn option(&self) -> &'static UpgradeOption {
        match self {
            UpgradeId::Health => &UPGRADE_OPTIONS[0],
            UpgradeId::Damage => &UPGRADE_OPTIONS[1],
            UpgradeId::Speed => &UPGRADE_OPTIONS[2],
        }
    }
}

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UpgradeId {
    type Err = UpgradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpgradeId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UpgradeError::UnknownUpgrade(s.to_string()))
    }
}

/// A choice shown in the level-up dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeOption {
    pub id: UpgradeId,
    pub display_name: &'static str,
    pub description: &'static str,
}

/// The fixed option table, in presentation order
pub const UPGRADE_OPTIONS: [UpgradeOption; 3] = [
    UpgradeOption {
        id: UpgradeId::Health,
        display_name: "Vitality",
        description: "Raises max health and fully heals",
    },
    UpgradeOption {
        id: UpgradeId::Damage,
        display_name: "Power",
        description: "Multiplies attack damage",
    },
    UpgradeOption {
        id: UpgradeId::Speed,
        display_name: "Agility",
        description: "Permanently increases movement speed",
    },
];

/// Before/after values of the stat an upgrade changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatChange {
    Health { old_max: u32, new_max: u32 },
    Damage { old: u32, new: u32 },
    Speed { old: f64, new: f64 },
}

impl fmt::Display for StatChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatChange::Health { old_max, new_max } => {
                write!(f, "max_health {old_max} → {new_max}, health fully restored")
            }
            StatChange::Damage { old, new } => write!(f, "damage {old} → {new}"),
            StatChange::Speed { old, new } => write!(f, "speed {old:.2} → {new:.2}"),
        }
    }
}

/// Result of a successfully applied upgrade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedUpgrade {
    pub id: UpgradeId,
    pub change: StatChange,
}

/// Strength of each upgrade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeTuning {
    pub health_bonus: u32,
    pub damage_multiplier: f64,
    pub speed_multiplier: f64,
}

impl UpgradeTuning {
    /// Apply one upgrade to `stats`. Each call is a separate permanent buff.
    pub fn apply(&self, id: UpgradeId, stats: &mut PlayerStats) -> Result<StatChange, UpgradeError> {
        match id {
            UpgradeId::Health => {
                let old_max = stats.health.raise_max(self.health_bonus);
                Ok(StatChange::Health {
                    old_max,
                    new_max: stats.health.max,
                })
            }
            UpgradeId::Damage => {
                let damage = stats.damage.as_mut().ok_or(UpgradeError::MissingStat {
                    upgrade: id,
                    stat: "damage",
                })?;
                let old = *damage;
                *damage = (f64::from(old) * self.damage_multiplier).floor() as u32;
                Ok(StatChange::Damage { old, new: *damage })
            }
            UpgradeId::Speed => {
                let speed = stats.base_speed.as_mut().ok_or(UpgradeError::MissingStat {
                    upgrade: id,
                    stat: "base_speed",
                })?;
                let old = *speed;
                *speed *= self.speed_multiplier;
                Ok(StatChange::Speed { old, new: *speed })
            }
        }
    }
}

impl Default for UpgradeTuning {
    fn default() -> Self {
        Self::from(&UpgradeConfig::default())
    }
}

impl From<&UpgradeConfig> for UpgradeTuning {
    fn from(config: &UpgradeConfig) -> Self {
        Self {
            health_bonus: config.health_bonus,
            damage_multiplier: config.damage_multiplier,
            speed_multiplier: config.speed_multiplier,
        }
    }
}
