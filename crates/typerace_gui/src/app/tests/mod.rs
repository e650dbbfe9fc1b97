//! Headless frame tests that drive the typing panel through egui input.


use super::*;
use typerace_core::{DeletionPolicy, SkipMode};

struct TestHarness {
    app: TypeRaceApp,
    ctx: egui::Context,
}

impl TestHarness {
    fn new(text: &str, skip_mode: SkipMode) -> Self {
        let config = Config {
            reference_text: text.to_string(),
            skip_mode,
            deletion_policy: DeletionPolicy::Retain,
        };
        let mut app = TypeRaceApp::new(&config);
        app.style_applied = true;
        Self {
            app,
            ctx: egui::Context::default(),
        }
    }

    fn screen_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(900.0, 500.0))
    }

    /// Runs one full app frame with `events` as this frame's input.
    fn run_frame(&mut self, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(Self::screen_rect()),
            events,
            ..Default::default()
        };
        let app = &mut self.app;
        let _ = self.ctx.run(input, |ctx| app.render_frame(ctx));
    }

    /// Runs an empty frame so the input picks up its initial focus request.
    fn focus(&mut self) {
        self.run_frame(Vec::new());
        assert!(self.input_focused());
    }

    fn input_focused(&self) -> bool {
        self.ctx
            .memory(|m| m.has_focus(egui::Id::new(TYPING_INPUT_ID)))
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.run_frame(vec![egui::Event::Text(ch.to_string())]);
        }
    }
}

fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}
