//! Screen-space geometry of the level-up dialog

use glam::Vec2;

use crate::config::DialogConfig;
use crate::progression::{UpgradeId, UPGRADE_OPTIONS};

/// Axis-aligned clickable rectangle in screen pixels.
/// Half-open: `min` is inside, `max` is outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitRegion {
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.x < self.max.x
            && point.y < self.max.y
    }

    pub fn overlaps(&self, other: &HitRegion) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Centered panel with three stacked option buttons, one per upgrade
#[derive(Debug, Clone, PartialEq)]
pub struct DialogLayout {
    pub panel: HitRegion,
    /// Button regions, same order as [`UPGRADE_OPTIONS`]
    pub buttons: [HitRegion; 3],
}

impl DialogLayout {
    /// Space reserved above the buttons for the title and level text
    pub const HEADER_HEIGHT: f32 = 110.0;
    /// Panel padding around the button column
    pub const PADDING: f32 = 24.0;

    /// Lay out the dialog in the middle of a `screen`-sized viewport
    pub fn centered(screen: Vec2, button_size: Vec2, spacing: f32) -> Self {
        let spacing = spacing.max(0.0);
        let panel_size = Vec2::new(
            button_size.x + Self::PADDING * 2.0,
            Self::HEADER_HEIGHT + button_size.y * 3.0 + spacing * 2.0 + Self::PADDING,
        );
        let panel_min = (screen - panel_size) * 0.5;
        let panel = HitRegion::from_min_size(panel_min, panel_size);

        let column_min = panel_min + Vec2::new(Self::PADDING, Self::HEADER_HEIGHT);
        let buttons = std::array::from_fn(|i| {
            let offset = Vec2::new(0.0, (button_size.y + spacing) * i as f32);
            HitRegion::from_min_size(column_min + offset, button_size)
        });

        Self { panel, buttons }
    }

    pub fn from_config(config: &DialogConfig) -> Self {
        Self::centered(
            Vec2::new(config.screen_width, config.screen_height),
            Vec2::new(config.button_width, config.button_height),
            config.button_spacing,
        )
    }

    /// The upgrade whose button contains `point`
    pub fn choice_at(&self, point: Vec2) -> Option<UpgradeId> {
        self.buttons
            .iter()
            .zip(UPGRADE_OPTIONS.iter())
            .find(|(region, _)| region.contains(point))
            .map(|(_, option)| option.id)
    }

    pub fn region_for(&self, id: UpgradeId) -> &HitRegion {
        let index = UPGRADE_OPTIONS
            .iter()
            .position(|option| option.id == id)
            .unwrap_or_default();
        &self.buttons[index]
    }
}

impl Default for DialogLayout {
    fn default() -> Self {
        Self::from_config(&DialogConfig::default())
    }
}
