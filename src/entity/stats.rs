use serde::{Deserialize, Serialize};

use super::health::Health;

/// The player stats that level-up upgrades can touch.
///
/// Health is always present. Damage and speed are optional because not every
/// controllable entity fights or moves (turrets, spectator bodies); upgrades
/// targeting a missing stat are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: Health,
    pub damage: Option<u32>,
    /// Movement speed in pixels/sec, before temporary modifiers
    pub base_speed: Option<f64>,
}

impl PlayerStats {
    pub fn new(max_health: u32, damage: u32, base_speed: f64) -> Self {
        Self {
            health: Health::new(max_health),
            damage: Some(damage),
            base_speed: Some(base_speed),
        }
    }

    /// Stats for an entity that can neither attack nor move
    pub fn stationary(max_health: u32) -> Self {
        Self {
            health: Health::new(max_health),
            damage: None,
            base_speed: None,
        }
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(5, 10, 200.0)
    }
}

impl std::fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Health: {}/{}", self.health.current, self.health.max)?;
        match self.damage {
            Some(damage) => write!(f, ", Damage: {damage}")?,
            None => write!(f, ", Damage: -")?,
        }
        match self.base_speed {
            Some(speed) => write!(f, ", Speed: {speed:.2}"),
            None => write!(f, ", Speed: -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_full_health() {
        let stats = PlayerStats::new(5, 10, 150.0);
        assert_eq!(stats.health.current, stats.health.max);
        assert_eq!(stats.damage, Some(10));
        assert_eq!(stats.base_speed, Some(150.0));
    }

    #[test]
    fn test_display() {
        let stats = PlayerStats::new(5, 10, 1.5);
        assert_eq!(stats.to_string(), "Health: 5/5, Damage: 10, Speed: 1.50");

        let turret = PlayerStats::stationary(3);
        assert_eq!(turret.to_string(), "Health: 3/3, Damage: -, Speed: -");
    }
}
