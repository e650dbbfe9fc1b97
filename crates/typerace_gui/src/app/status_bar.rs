//! Bottom status bar with session progress and the reset control.

use super::*;
use eframe::egui::RichText;

impl TypeRaceApp {
    /// Renders progress, skip mode, and the reset button.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let mut reset_requested = false;
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.tracker.is_complete() {
                        ui.label(RichText::new("Complete").color(COLOR_MATCH));
                        ui.separator();
                    }
                    ui.label(
                        RichText::new(format!(
                            "{} / {} chars",
                            self.tracker.caret(),
                            self.tracker.reference().len()
                        ))
                        .color(COLOR_TEXT_PRIMARY),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(format!("skip: {}", self.tracker.skip_mode()))
                            .small()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Reset").clicked() {
                            reset_requested = true;
                        }
                        ui.label(RichText::new("Esc resets").small().color(COLOR_TEXT_MUTED));
                    });
                });
            });
        if reset_requested {
            self.reset_session(ctx);
        }
    }
}
