//! egui app shell: a reference-text overlay with a transparent input on top.

mod input;
mod overlay;
mod status_bar;
mod style;

use eframe::egui::{
    self,
    text::{CCursor, CCursorRange},
};
use input::route_pass_through_keys;
use style::*;
use tracing::{debug, info};
use typerace_core::{Config, MatchTracker};

#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [820.0, 420.0];
#[doc = "Minimum enforced window size to keep the overlay readable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 260.0];
const TYPING_INPUT_ID: &str = "typing_input";

/// Native egui application for one typing session.
///
/// `input_text` mirrors the tracker buffer; the `TextEdit` edits it in place
/// and every change is fed back through the tracker.
pub(crate) struct TypeRaceApp {
    tracker: MatchTracker,
    input_text: String,
    focus_input_next: bool,
    style_applied: bool,
}

impl TypeRaceApp {
    /// Construct an app with a fresh tracker for `config`.
    pub(crate) fn new(config: &Config) -> Self {
        let tracker = MatchTracker::from_config(config);
        info!(
            chars = tracker.reference().len(),
            skip_mode = %tracker.skip_mode(),
            "typing session ready"
        );
        Self {
            tracker,
            input_text: String::new(),
            focus_input_next: true,
            style_applied: false,
        }
    }

    fn input_id() -> egui::Id {
        egui::Id::new(TYPING_INPUT_ID)
    }

    /// Copy the tracker buffer into the `TextEdit` and park its caret at the end.
    fn sync_input_from_tracker(&mut self, ctx: &egui::Context) {
        self.input_text = self.tracker.input();
        let id = Self::input_id();
        let mut state = egui::TextEdit::load_state(ctx, id).unwrap_or_default();
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(self.tracker.caret()))));
        state.store(ctx, id);
    }

    /// Feed the `TextEdit` value through the tracker after a change.
    fn apply_input_change(&mut self, ctx: &egui::Context) {
        let outcome = self.tracker.apply_input(&self.input_text);
        if outcome.rewrites_input() {
            self.sync_input_from_tracker(ctx);
        }
    }

    /// Offer this frame's Space/Enter presses to the tracker before the
    /// `TextEdit` sees them.
    fn intercept_keys(&mut self, ctx: &egui::Context) {
        if !ctx.memory(|m| m.has_focus(Self::input_id())) {
            return;
        }
        let tracker = &mut self.tracker;
        let suppressed = ctx.input_mut(|input| route_pass_through_keys(&mut input.events, tracker));
        if suppressed > 0 {
            self.sync_input_from_tracker(ctx);
        }
    }

    fn reset_session(&mut self, ctx: &egui::Context) {
        self.tracker.reset();
        self.sync_input_from_tracker(ctx);
        self.focus_input_next = true;
        debug!("typing session reset");
    }

    /// Lays out one frame: style, reset shortcut, status bar, typing panel.
    fn render_frame(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            self.reset_session(ctx);
        }
        self.render_status_bar(ctx);
        self.render_typing_panel(ctx);
    }
}

impl eframe::App for TypeRaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}

#[cfg(test)]
mod tests;
