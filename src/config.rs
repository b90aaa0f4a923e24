//! Progression tuning with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `progression.ron` file (if exists)
//! 3. Environment variables prefixed with `LEVELUP_`
//!
//! Example environment variable: `LEVELUP_GROWTH__RATE=1.15`

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Main progression configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressionConfig {
    #[serde(default)]
    pub growth: GrowthConfig,

    #[serde(default)]
    pub upgrades: UpgradeConfig,

    #[serde(default)]
    pub dialog: DialogConfig,
}

/// EXP curve settings: `floor(base * rate^(level - 1))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// EXP required to leave level 1
    pub base: u32,
    /// Per-level growth factor (must be >= 1.0)
    pub rate: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base: 100,
            rate: 1.30,
        }
    }
}

/// Stat upgrade strengths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeConfig {
    /// Flat max health gained by the health upgrade
    pub health_bonus: u32,
    /// Damage multiplier (result is floored)
    pub damage_multiplier: f64,
    /// Base speed multiplier
    pub speed_multiplier: f64,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            health_bonus: 1,
            damage_multiplier: 1.5,
            speed_multiplier: 1.10,
        }
    }
}

/// Level-up dialog layout and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Delay between a choice and the dialog closing
    pub dismiss_delay_ms: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    pub button_width: f32,
    pub button_height: f32,
    /// Vertical gap between option buttons
    pub button_spacing: f32,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: 500,
            screen_width: 1280.0,
            screen_height: 720.0,
            button_width: 360.0,
            button_height: 64.0,
            button_spacing: 12.0,
        }
    }
}

impl ProgressionConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `progression.ron` file (if exists)
    /// 3. Environment variables prefixed with `LEVELUP_` (highest priority)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let file = config::File::with_name("progression")
            .format(config::FileFormat::Ron)
            .required(false);
        Self::load_layered(file)
    }

    /// Same layering as [`ProgressionConfig::load`], but with an explicit RON file
    /// that must exist.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = config::File::from(path)
            .format(config::FileFormat::Ron)
            .required(true);
        Self::load_layered(file)
            .with_context(|| format!("Failed to load progression config: {}", path.display()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_layered<T>(file: T) -> Result<Self>
    where
        T: config::Source + Send + Sync + 'static,
    {
        use config::{Config, Environment};

        let defaults = Self::default();
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("growth.base", i64::from(defaults.growth.base))?
            .set_default("growth.rate", defaults.growth.rate)?
            .set_default("upgrades.health_bonus", i64::from(defaults.upgrades.health_bonus))?
            .set_default("upgrades.damage_multiplier", defaults.upgrades.damage_multiplier)?
            .set_default("upgrades.speed_multiplier", defaults.upgrades.speed_multiplier)?
            .set_default("dialog.dismiss_delay_ms", defaults.dialog.dismiss_delay_ms as i64)?
            .set_default("dialog.screen_width", f64::from(defaults.dialog.screen_width))?
            .set_default("dialog.screen_height", f64::from(defaults.dialog.screen_height))?
            .set_default("dialog.button_width", f64::from(defaults.dialog.button_width))?
            .set_default("dialog.button_height", f64::from(defaults.dialog.button_height))?
            .set_default("dialog.button_spacing", f64::from(defaults.dialog.button_spacing))?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (LEVELUP_GROWTH__RATE, etc.)
            .add_source(
                Environment::with_prefix("LEVELUP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a RON document without layering
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source).context("Failed to parse RON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a RON file (useful as a starting template)
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize config to RON")?;

        std::fs::write(path.as_ref(), ron).with_context(|| {
            format!("Failed to write config file: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Reject tunings that would break progression invariants
    pub fn validate(&self) -> Result<()> {
        ensure!(self.growth.base > 0, "growth.base must be positive");
        ensure!(
            self.growth.rate.is_finite() && self.growth.rate >= 1.0,
            "growth.rate must be >= 1.0 (got {})",
            self.growth.rate
        );
        ensure!(
            self.upgrades.damage_multiplier.is_finite() && self.upgrades.damage_multiplier > 0.0,
            "upgrades.damage_multiplier must be positive"
        );
        ensure!(
            self.upgrades.speed_multiplier.is_finite() && self.upgrades.speed_multiplier > 0.0,
            "upgrades.speed_multiplier must be positive"
        );

        let dialog = &self.dialog;
        for (name, value) in [
            ("screen_width", dialog.screen_width),
            ("screen_height", dialog.screen_height),
            ("button_width", dialog.button_width),
            ("button_height", dialog.button_height),
        ] {
            ensure!(value > 0.0, "dialog.{name} must be positive");
        }
        ensure!(
            dialog.button_spacing >= 0.0,
            "dialog.button_spacing must not be negative"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProgressionConfig::default();
        assert_eq!(config.growth.base, 100);
        assert_eq!(config.growth.rate, 1.30);
        assert_eq!(config.upgrades.health_bonus, 1);
        assert_eq!(config.upgrades.damage_multiplier, 1.5);
        assert_eq!(config.dialog.dismiss_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shrinking_curve() {
        let mut config = ProgressionConfig::default();
        config.growth.rate = 0.9;
        assert!(config.validate().is_err());

        let mut config = ProgressionConfig::default();
        config.growth.base = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_dialog_size() {
        let mut config = ProgressionConfig::default();
        config.dialog.button_height = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_ron_partial_sections() {
        let config = ProgressionConfig::from_ron_str("(growth: (base: 30, rate: 1.15))")
            .expect("Failed to parse");
        assert_eq!(config.growth.base, 30);
        assert_eq!(config.growth.rate, 1.15);
        // Omitted sections fall back to defaults
        assert_eq!(config.upgrades, UpgradeConfig::default());
        assert_eq!(config.dialog, DialogConfig::default());
    }

    #[test]
    fn test_ron_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progression.ron");

        let mut config = ProgressionConfig::default();
        config.upgrades.damage_multiplier = 1.1;
        config.to_file(&path).unwrap();

        let loaded = ProgressionConfig::load_from(&path).expect("Failed to load config");
        assert_eq!(loaded.upgrades.damage_multiplier, 1.1);
        assert_eq!(loaded.growth, GrowthConfig::default());
    }

    #[test]
    fn test_env_overrides_defaults() {
        // Only dialog.dismiss_delay_ms is touched so parallel tests stay unaffected
        std::env::set_var("LEVELUP_DIALOG__DISMISS_DELAY_MS", "750");
        let loaded = ProgressionConfig::load();
        std::env::remove_var("LEVELUP_DIALOG__DISMISS_DELAY_MS");

        let config = loaded.expect("Failed to load config");
        assert_eq!(config.dialog.dismiss_delay_ms, 750);
        assert_eq!(config.growth, GrowthConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ProgressionConfig::load_from(dir.path().join("nope.ron")).is_err());
    }
}
