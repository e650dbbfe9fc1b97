//! Theme constants and one-time style application for the typing window.

use super::TypeRaceApp;
use eframe::egui::{self, Color32, FontFamily, FontId, Margin, Stroke, TextStyle, Visuals};
use typerace_core::CharState;

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x0d, 0x11, 0x17);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x16, 0x1b, 0x22);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xc9, 0xd1, 0xd9);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8b, 0x94, 0x9e);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6e, 0x76, 0x81);
pub(super) const COLOR_MATCH: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub(super) const COLOR_MISMATCH: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub(super) const COLOR_NEUTRAL: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub(super) const COLOR_CARET: Color32 = Color32::from_rgb(0xE5, 0x70, 0x00);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x30, 0x36, 0x3d);
pub(super) const TYPING_FONT_SIZE: f32 = 20.0;

pub(super) fn typing_font() -> FontId {
    FontId::new(TYPING_FONT_SIZE, FontFamily::Monospace)
}

pub(super) fn char_state_color(state: CharState) -> Color32 {
    match state {
        CharState::Neutral => COLOR_NEUTRAL,
        CharState::Match => COLOR_MATCH,
        CharState::Mismatch => COLOR_MISMATCH,
    }
}

impl TypeRaceApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_SECONDARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.text_cursor.stroke = Stroke::new(2.0, COLOR_CARET);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.item_spacing = egui::vec2(12.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(22.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
