//! EXP accumulation, level thresholds and level-up stat upgrades

pub mod error;
pub mod exp_manager;
pub mod growth;
pub mod state;
pub mod upgrade;

pub use error::UpgradeError;
pub use exp_manager::{ExpManager, LevelUpEvent, LevelUpPrompt};
pub use growth::GrowthCurve;
pub use state::ProgressionState;
pub use upgrade::{
    AppliedUpgrade, StatChange, UpgradeId, UpgradeOption, UpgradeTuning, UPGRADE_OPTIONS,
};
