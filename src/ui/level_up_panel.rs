//! egui rendering of the level-up dialog
//!
//! Buttons are painted exactly at the dialog's hit regions, so what the player
//! sees is what [`LevelUpDialog::handle_click`] resolves.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};

use super::layout::HitRegion;
use super::level_up_dialog::{DialogState, LevelUpDialog};

const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(39, 39, 39, 200);
const GOLD: Color32 = Color32::from_rgb(255, 200, 50);
const TITLE_TEXT: Color32 = Color32::from_rgb(255, 255, 100);
const BUTTON_FILL: Color32 = Color32::from_rgb(60, 60, 70);
const BUTTON_HOVER: Color32 = Color32::from_rgb(90, 85, 60);
const BUTTON_CHOSEN: Color32 = Color32::from_rgb(120, 100, 30);
const DESCRIPTION_TEXT: Color32 = Color32::from_rgb(200, 200, 200);

fn to_rect(region: &HitRegion) -> Rect {
    Rect::from_min_max(
        Pos2::new(region.min.x, region.min.y),
        Pos2::new(region.max.x, region.max.y),
    )
}

/// Render the dialog overlay. Draws nothing while the dialog is hidden.
///
/// `pointer` is the cursor position in the same screen space as the layout.
pub fn render_level_up_panel(
    ctx: &egui::Context,
    dialog: &LevelUpDialog,
    pointer: Option<glam::Vec2>,
) {
    let Some(level) = dialog.level() else {
        return;
    };

    let chosen = match dialog.state() {
        DialogState::ChoiceMade { choice, .. } => Some(choice),
        _ => None,
    };
    let hovered = pointer.and_then(|point| dialog.hovered(point));
    let layout = dialog.layout();

    egui::Area::new(egui::Id::new("level_up_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let painter = ui.painter();

            // Dim the paused game behind the dialog
            painter.rect_filled(
                ctx.content_rect(),
                CornerRadius::ZERO,
                Color32::from_black_alpha(160),
            );

            let panel = to_rect(&layout.panel);
            painter.rect_filled(panel, CornerRadius::same(10), PANEL_FILL);
            painter.rect_stroke(
                panel,
                CornerRadius::same(10),
                Stroke::new(3.0, GOLD),
                StrokeKind::Inside,
            );

            painter.text(
                Pos2::new(panel.center().x, panel.min.y + 40.0),
                Align2::CENTER_CENTER,
                "LEVEL UP!",
                FontId::proportional(40.0),
                TITLE_TEXT,
            );
            painter.text(
                Pos2::new(panel.center().x, panel.min.y + 80.0),
                Align2::CENTER_CENTER,
                format!("Level {level}"),
                FontId::proportional(24.0),
                TITLE_TEXT,
            );

            for (region, option) in layout.buttons.iter().zip(dialog.options()) {
                let rect = to_rect(region);
                let fill = if chosen == Some(option.id) {
                    BUTTON_CHOSEN
                } else if hovered == Some(option.id) {
                    BUTTON_HOVER
                } else {
                    BUTTON_FILL
                };
                let border = if chosen == Some(option.id) || hovered == Some(option.id) {
                    GOLD
                } else {
                    Color32::from_gray(110)
                };

                painter.rect_filled(rect, CornerRadius::same(6), fill);
                painter.rect_stroke(
                    rect,
                    CornerRadius::same(6),
                    Stroke::new(2.0, border),
                    StrokeKind::Inside,
                );

                painter.text(
                    Pos2::new(rect.center().x, rect.min.y + rect.height() * 0.35),
                    Align2::CENTER_CENTER,
                    option.display_name,
                    FontId::proportional(20.0),
                    Color32::WHITE,
                );
                painter.text(
                    Pos2::new(rect.center().x, rect.min.y + rect.height() * 0.72),
                    Align2::CENTER_CENTER,
                    option.description,
                    FontId::proportional(13.0),
                    DESCRIPTION_TEXT,
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::UpgradeId;

    /// Shapes produced by the last of a few frames (new areas need a sizing pass)
    fn run_frame(ctx: &egui::Context, dialog: &LevelUpDialog, pointer: Option<glam::Vec2>) -> usize {
        let mut shapes = 0;
        for _ in 0..3 {
            let output = ctx.run(egui::RawInput::default(), |ctx| {
                render_level_up_panel(ctx, dialog, pointer);
            });
            shapes = output.shapes.len();
        }
        shapes
    }

    #[test]
    fn test_hidden_dialog_draws_nothing() {
        let ctx = egui::Context::default();
        let dialog = LevelUpDialog::default();
        assert_eq!(run_frame(&ctx, &dialog, None), 0);
    }

    #[test]
    fn test_open_dialog_draws_shapes() {
        let ctx = egui::Context::default();
        let mut dialog = LevelUpDialog::default();
        dialog.show(2);
        let pointer = dialog.layout().region_for(UpgradeId::Damage).center();
        assert!(run_frame(&ctx, &dialog, Some(pointer)) > 0);
    }

    #[test]
    fn test_to_rect_matches_region() {
        let region = HitRegion::from_min_size(glam::Vec2::new(5.0, 6.0), glam::Vec2::new(10.0, 20.0));
        let rect = to_rect(&region);
        assert_eq!(rect.min, Pos2::new(5.0, 6.0));
        assert_eq!(rect.max, Pos2::new(15.0, 26.0));
    }
}
