//! EXP intake and level-up resolution
//!
//! The manager is the single writer of [`ProgressionState`]. Stat upgrades are
//! applied to a [`PlayerStats`] handed in by the caller, and the level-up dialog
//! is reached through the [`LevelUpPrompt`] seam so the manager never depends on
//! rendering.

use super::error::UpgradeError;
use super::growth::GrowthCurve;
use super::state::ProgressionState;
use super::upgrade::{AppliedUpgrade, UpgradeId, UpgradeTuning};
use crate::config::ProgressionConfig;
use crate::entity::PlayerStats;
use crate::ui::LevelUpDialog;

/// What the manager needs from a level-up dialog
pub trait LevelUpPrompt {
    /// Open the prompt for `level`, replacing any pending choice
    fn show(&mut self, level: u32);

    /// True while the prompt waits for the player to pick an upgrade
    fn is_awaiting_choice(&self) -> bool;
}

/// Emitted when an award crosses the level threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpEvent {
    /// The level just reached
    pub level: u32,
    /// Threshold for the new level
    pub exp_to_next_level: u32,
}

/// Owns EXP/level state and applies level-up upgrades
pub struct ExpManager<P: LevelUpPrompt = LevelUpDialog> {
    state: ProgressionState,
    curve: GrowthCurve,
    tuning: UpgradeTuning,
    dialog: Option<P>,
}

impl<P: LevelUpPrompt> ExpManager<P> {
    pub fn new(config: &ProgressionConfig) -> Self {
        let curve = GrowthCurve::from(&config.growth);
        Self {
            state: ProgressionState::new(&curve),
            curve,
            tuning: UpgradeTuning::from(&config.upgrades),
            dialog: None,
        }
    }

    /// Register the level-up dialog. Only the first registration is kept.
    pub fn set_dialog(&mut self, dialog: P) {
        if self.dialog.is_some() {
            log::warn!("ExpManager: level-up dialog already registered, ignoring replacement");
            return;
        }
        self.dialog = Some(dialog);
        log::debug!("ExpManager: level-up dialog registered");
    }

    pub fn dialog(&self) -> Option<&P> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut P> {
        self.dialog.as_mut()
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn curve(&self) -> &GrowthCurve {
        &self.curve
    }

    pub fn tuning(&self) -> &UpgradeTuning {
        &self.tuning
    }

    /// Add EXP from a reward and resolve at most one level-up.
    ///
    /// EXP beyond the threshold is discarded: a single huge award advances
    /// exactly one level.
    pub fn award_exp(&mut self, amount: u32) -> Option<LevelUpEvent> {
        self.state.current_exp = self.state.current_exp.saturating_add(amount);

        log::debug!(
            "[ExpManager] +{} EXP ({}/{})",
            amount,
            self.state.current_exp,
            self.state.exp_to_next_level
        );

        if self.is_level_up() {
            Some(self.level_up())
        } else {
            None
        }
    }

    /// True when the current EXP reaches the level threshold
    pub fn is_level_up(&self) -> bool {
        self.state.current_exp >= self.state.exp_to_next_level
    }

    /// Advance one level, reset EXP and open the level-up dialog
    pub fn level_up(&mut self) -> LevelUpEvent {
        self.state.current_exp = 0;
        self.state.level = self.state.level.saturating_add(1);
        self.state.exp_to_next_level = self.growth_curve(self.state.level);

        log::info!(
            "[ExpManager] LEVEL UP: level {} (next requires {} EXP)",
            self.state.level,
            self.state.exp_to_next_level
        );

        match self.dialog.as_mut() {
            Some(dialog) => dialog.show(self.state.level),
            None => log::warn!(
                "ExpManager: no level-up dialog registered, level {} applied without a choice",
                self.state.level
            ),
        }

        LevelUpEvent {
            level: self.state.level,
            exp_to_next_level: self.state.exp_to_next_level,
        }
    }

    /// EXP threshold for `level`
    pub fn growth_curve(&self, level: u32) -> u32 {
        self.curve.exp_for_level(level)
    }

    /// Apply the chosen upgrade to `player`.
    ///
    /// Failures never panic: they are logged and returned so progression keeps
    /// going without the buff.
    pub fn apply_upgrade(
        &self,
        choice: UpgradeId,
        player: Option<&mut PlayerStats>,
    ) -> Result<AppliedUpgrade, UpgradeError> {
        let Some(player) = player else {
            let err = UpgradeError::MissingPlayer(choice);
            log::warn!("ExpManager: {err}");
            return Err(err);
        };

        log::debug!("Current player stats - {player}");

        match self.tuning.apply(choice, player) {
            Ok(change) => {
                log::info!("{} upgrade: {}", choice, change);
                log::debug!("Updated player stats - {player}");
                Ok(AppliedUpgrade { id: choice, change })
            }
            Err(err) => {
                log::warn!("ExpManager: {err}");
                Err(err)
            }
        }
    }

    /// Like [`ExpManager::apply_upgrade`], but takes the upgrade by name
    pub fn apply_upgrade_named(
        &self,
        name: &str,
        player: Option<&mut PlayerStats>,
    ) -> Result<AppliedUpgrade, UpgradeError> {
        match name.parse::<UpgradeId>() {
            Ok(choice) => self.apply_upgrade(choice, player),
            Err(err) => {
                log::warn!("ExpManager: {err}");
                Err(err)
            }
        }
    }

    /// True while the registered dialog waits for a choice.
    /// Gameplay updates should be withheld while this holds.
    pub fn is_awaiting_choice(&self) -> bool {
        self.dialog
            .as_ref()
            .is_some_and(|dialog| dialog.is_awaiting_choice())
    }
}

impl<P: LevelUpPrompt> Default for ExpManager<P> {
    fn default() -> Self {
        Self::new(&ProgressionConfig::default())
    }
}
