//! # Levelup - EXP progression and level-up upgrades
//!
//! Enemies award EXP, crossing a threshold raises the player's level and opens a
//! modal dialog offering one permanent stat upgrade.
//!
//! ```
//! use levelup::prelude::*;
//!
//! let mut exp = ExpManager::default();
//! exp.set_dialog(LevelUpDialog::default());
//! let mut player = PlayerStats::default();
//!
//! assert!(exp.award_exp(150).is_some());
//! assert!(exp.is_awaiting_choice());
//!
//! let click = exp.dialog().unwrap().layout().region_for(UpgradeId::Health).center();
//! let choice = exp.dialog_mut().and_then(|dialog| dialog.handle_click(click));
//! if let Some(choice) = choice {
//!     exp.apply_upgrade(choice, Some(&mut player)).unwrap();
//! }
//! assert_eq!(player.health.max, 6);
//! ```

pub mod config;
pub mod entity;
pub mod progression;
pub mod ui;

pub use config::ProgressionConfig;
pub use progression::ExpManager;
pub use ui::LevelUpDialog;

/// Common imports for game-loop integration
pub mod prelude {
    pub use crate::config::ProgressionConfig;
    pub use crate::entity::{Health, PlayerStats};
    pub use crate::progression::{ExpManager, LevelUpEvent, UpgradeError, UpgradeId};
    pub use crate::ui::{DialogState, LevelUpDialog};
    pub use glam::Vec2;
}
