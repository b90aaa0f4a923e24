//! Level-up dialog: interaction state, layout and egui rendering

pub mod layout;
pub mod level_up_dialog;
pub mod level_up_panel;

pub use layout::{DialogLayout, HitRegion};
pub use level_up_dialog::{DialogState, LevelUpDialog};
pub use level_up_panel::render_level_up_panel;
