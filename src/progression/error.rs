use super::upgrade::UpgradeId;

/// Reasons a level-up upgrade could not be applied.
///
/// None of these are fatal: progression has already advanced by the time an
/// upgrade is applied, only the stat buff is lost.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpgradeError {
    /// No player was available to receive the upgrade
    #[error("no player reference available for {0} upgrade")]
    MissingPlayer(UpgradeId),

    /// The player has no such stat (e.g. a stationary entity picking speed)
    #[error("player has no {stat} stat, skipping {upgrade} upgrade")]
    MissingStat {
        upgrade: UpgradeId,
        stat: &'static str,
    },

    /// The upgrade name did not match any known upgrade
    #[error("unknown upgrade type: {0}")]
    UnknownUpgrade(String),
}
