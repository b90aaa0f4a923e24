//! Modal level-up dialog: waits for the player to pick one upgrade
//!
//! State machine:
//! - `Hidden --show(level)--> AwaitingChoice(level)`
//! - `AwaitingChoice --click on a button--> ChoiceMade(level, id)`
//! - `AwaitingChoice --click elsewhere--> AwaitingChoice` (no timeout)
//! - `ChoiceMade --dismiss delay elapsed--> Hidden`
//! - `show(level)` from any state starts a fresh `AwaitingChoice(level)`
//!
//! The dialog only reports the chosen [`UpgradeId`]; applying it to the player
//! is the caller's job (see [`crate::progression::ExpManager::apply_upgrade`]).

use std::time::Duration;

use glam::Vec2;
use web_time::Instant;

use super::layout::DialogLayout;
use crate::config::DialogConfig;
use crate::progression::{LevelUpPrompt, UpgradeId, UpgradeOption, UPGRADE_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Hidden,
    AwaitingChoice {
        level: u32,
    },
    ChoiceMade {
        level: u32,
        choice: UpgradeId,
        chosen_at: Instant,
    },
}

pub struct LevelUpDialog {
    state: DialogState,
    layout: DialogLayout,
    dismiss_delay: Duration,
}

impl LevelUpDialog {
    pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(500);

    pub fn new(layout: DialogLayout, dismiss_delay: Duration) -> Self {
        Self {
            state: DialogState::Hidden,
            layout,
            dismiss_delay,
        }
    }

    pub fn from_config(config: &DialogConfig) -> Self {
        Self::new(
            DialogLayout::from_config(config),
            Duration::from_millis(config.dismiss_delay_ms),
        )
    }

    /// Open for `level`. A pending choice for an earlier level is dropped.
    pub fn show(&mut self, level: u32) {
        if let Some(pending) = self.level() {
            log::debug!("LevelUpDialog: replacing level {pending} with level {level}");
        }
        self.state = DialogState::AwaitingChoice { level };
        log::debug!("LevelUpDialog showing for level {level}");
    }

    /// Resolve a click at `point` using the current time
    pub fn handle_click(&mut self, point: Vec2) -> Option<UpgradeId> {
        self.handle_click_at(point, Instant::now())
    }

    /// Resolve a click at `point`, stamping the choice with `now`.
    /// Returns the chosen upgrade, or `None` if the click missed every button
    /// or the dialog is not waiting for a choice.
    pub fn handle_click_at(&mut self, point: Vec2, now: Instant) -> Option<UpgradeId> {
        let DialogState::AwaitingChoice { level } = self.state else {
            return None;
        };

        let choice = self.layout.choice_at(point)?;
        self.state = DialogState::ChoiceMade {
            level,
            choice,
            chosen_at: now,
        };
        log::debug!("LevelUpDialog: level {level} choice {choice}");
        Some(choice)
    }

    /// Per-frame poll; closes the dialog once the dismiss delay has passed
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        if let DialogState::ChoiceMade { chosen_at, .. } = self.state {
            if now.duration_since(chosen_at) >= self.dismiss_delay {
                self.hide();
            }
        }
    }

    /// Force the dialog closed from any state
    pub fn hide(&mut self) {
        if self.state != DialogState::Hidden {
            log::debug!("LevelUpDialog hidden");
        }
        self.state = DialogState::Hidden;
    }

    pub fn is_awaiting_choice(&self) -> bool {
        matches!(self.state, DialogState::AwaitingChoice { .. })
    }

    pub fn is_visible(&self) -> bool {
        self.state != DialogState::Hidden
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Level being offered, if the dialog is open
    pub fn level(&self) -> Option<u32> {
        match self.state {
            DialogState::Hidden => None,
            DialogState::AwaitingChoice { level } | DialogState::ChoiceMade { level, .. } => {
                Some(level)
            }
        }
    }

    /// Option under the pointer while a choice is pending (for highlighting)
    pub fn hovered(&self, point: Vec2) -> Option<UpgradeId> {
        if self.is_awaiting_choice() {
            self.layout.choice_at(point)
        } else {
            None
        }
    }

    pub fn options(&self) -> &'static [UpgradeOption; 3] {
        &UPGRADE_OPTIONS
    }

    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }

    pub fn dismiss_delay(&self) -> Duration {
        self.dismiss_delay
    }
}

impl Default for LevelUpDialog {
    fn default() -> Self {
        Self::new(DialogLayout::default(), Self::DEFAULT_DISMISS_DELAY)
    }
}

impl LevelUpPrompt for LevelUpDialog {
    fn show(&mut self, level: u32) {
        LevelUpDialog::show(self, level);
    }

    fn is_awaiting_choice(&self) -> bool {
        LevelUpDialog::is_awaiting_choice(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(dialog: &LevelUpDialog, id: UpgradeId) -> Vec2 {
        dialog.layout().region_for(id).center()
    }

    #[test]
    fn test_starts_hidden() {
        let dialog = LevelUpDialog::default();
        assert_eq!(dialog.state(), DialogState::Hidden);
        assert!(!dialog.is_visible());
        assert_eq!(dialog.level(), None);
    }

    #[test]
    fn test_show_awaits_choice() {
        let mut dialog = LevelUpDialog::default();
        dialog.show(2);
        assert_eq!(dialog.state(), DialogState::AwaitingChoice { level: 2 });
        assert!(dialog.is_awaiting_choice());
    }

    #[test]
    fn test_click_on_button_chooses() {
        let mut dialog = LevelUpDialog::default();
        dialog.show(2);
        let now = Instant::now();

        let point = center_of(&dialog, UpgradeId::Health);
        assert_eq!(dialog.handle_click_at(point, now), Some(UpgradeId::Health));
        assert_eq!(
            dialog.state(),
            DialogState::ChoiceMade {
                level: 2,
                choice: UpgradeId::Health,
                chosen_at: now
            }
        );
        assert!(!dialog.is_awaiting_choice());
    }

    #[test]
    fn test_each_button_maps_to_its_upgrade() {
        for id in UpgradeId::ALL {
            let mut dialog = LevelUpDialog::default();
            dialog.show(3);
            let point = center_of(&dialog, id);
            assert_eq!(dialog.handle_click(point), Some(id));
        }
    }

    #[test]
    fn test_click_outside_stays_open() {
        let mut dialog = LevelUpDialog::default();
        dialog.show(4);
        assert_eq!(dialog.handle_click(Vec2::new(1.0, 1.0)), None);
        assert_eq!(dialog.state(), DialogState::AwaitingChoice { level: 4 });
    }

    #[test]
    fn test_click_ignored_when_not_awaiting() {
        let mut dialog = LevelUpDialog::default();
        let point = center_of(&dialog, UpgradeId::Damage);
        assert_eq!(dialog.handle_click(point), None);
        assert_eq!(dialog.state(), DialogState::Hidden);

        dialog.show(2);
        assert_eq!(dialog.handle_click(point), Some(UpgradeId::Damage));
        // Second click while ChoiceMade does nothing
        assert_eq!(dialog.handle_click(center_of(&dialog, UpgradeId::Speed)), None);
        assert!(matches!(
            dialog.state(),
            DialogState::ChoiceMade {
                choice: UpgradeId::Damage,
                ..
            }
        ));
    }

    #[test]
    fn test_dismiss_after_delay() {
        let mut dialog = LevelUpDialog::default();
        dialog.show(2);
        let chosen_at = Instant::now();
        dialog.handle_click_at(center_of(&dialog, UpgradeId::Speed), chosen_at);

        dialog.update_at(chosen_at + Duration::from_millis(100));
        assert!(dialog.is_visible());

        dialog.update_at(chosen_at + LevelUpDialog::DEFAULT_DISMISS_DELAY);
        assert_eq!(dialog.state(), DialogState::Hidden);
    }

    #[test]
    fn test_awaiting_never_times_out() {
        let mut dialog = LevelUpDialog::default();
        dialog.show(2);
        dialog.update_at(Instant::now() + Duration::from_secs(3600));
        assert!(dialog.is_awaiting_choice());
    }

    #[test]
    fn test_show_replaces_pending_level() {
        let mut dialog = LevelUpDialog::default();
        dialog.show(2);
        dialog.show(3);
        assert_eq!(dialog.state(), DialogState::AwaitingChoice { level: 3 });

        dialog.handle_click(center_of(&dialog, UpgradeId::Health));
        dialog.show(4);
        assert_eq!(dialog.state(), DialogState::AwaitingChoice { level: 4 });
    }

    #[test]
    fn test_hide_from_any_state() {
        let mut dialog = LevelUpDialog::default();
        dialog.hide();
        assert_eq!(dialog.state(), DialogState::Hidden);

        dialog.show(2);
        dialog.hide();
        assert_eq!(dialog.state(), DialogState::Hidden);

        dialog.show(2);
        dialog.handle_click(center_of(&dialog, UpgradeId::Damage));
        dialog.hide();
        assert_eq!(dialog.state(), DialogState::Hidden);
    }

    #[test]
    fn test_hovered_only_while_awaiting() {
        let mut dialog = LevelUpDialog::default();
        let point = center_of(&dialog, UpgradeId::Speed);
        assert_eq!(dialog.hovered(point), None);

        dialog.show(2);
        assert_eq!(dialog.hovered(point), Some(UpgradeId::Speed));
        assert_eq!(dialog.hovered(Vec2::ZERO), None);
    }

    #[test]
    fn test_from_config_uses_delay() {
        let config = DialogConfig {
            dismiss_delay_ms: 250,
            ..DialogConfig::default()
        };
        let dialog = LevelUpDialog::from_config(&config);
        assert_eq!(dialog.dismiss_delay(), Duration::from_millis(250));
    }
}
