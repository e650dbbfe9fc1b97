//! Reference-text overlay with the transparent typing input stacked on top.

use super::*;
use eframe::egui::{
    text::{LayoutJob, LayoutSection, TextFormat},
    FontId, Margin, RichText,
};
use typerace_core::{view::styled_runs, SkipMode, StyledRun};

/// Builds the coloured layout job for the reference text.
///
/// Wrapping is disabled so the overlay lines up with the unwrapped input
/// galley character for character.
pub(super) fn build_reference_job(runs: &[StyledRun], font: &FontId) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = f32::INFINITY;
    for run in runs {
        let start = job.text.len();
        job.text.push_str(&run.text);
        job.sections.push(LayoutSection {
            leading_space: 0.0,
            byte_range: start..job.text.len(),
            format: TextFormat {
                font_id: font.clone(),
                color: char_state_color(run.state),
                ..Default::default()
            },
        });
    }
    job
}

fn skip_mode_hint(mode: SkipMode) -> &'static str {
    match mode {
        SkipMode::Off => "Type every character, line breaks included.",
        SkipMode::LineBreak => "Line breaks are filled in for you; Space or Enter passes them.",
        SkipMode::Whitespace => {
            "Line breaks and indentation are filled in; Space or Enter passes them."
        }
    }
}

impl TypeRaceApp {
    pub(crate) fn render_typing_panel(&mut self, ctx: &egui::Context) {
        self.intercept_keys(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Type Speed Race");
            ui.label(
                RichText::new(skip_mode_hint(self.tracker.skip_mode()))
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
            ui.add_space(8.0);

            let font = typing_font();
            let states = self.tracker.char_states();
            let runs = styled_runs(self.tracker.reference(), &states);
            let galley = ui.painter().layout_job(build_reference_job(&runs, &font));
            let size = egui::vec2(
                galley.size().x.max(ui.available_width()),
                galley.size().y,
            );
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().galley(rect.min, galley, COLOR_NEUTRAL);

            let line_count = self.tracker.reference().to_string().lines().count().max(1);
            let mut layouter = |ui: &egui::Ui, text: &dyn egui::TextBuffer, _wrap_width: f32| {
                ui.painter().layout_no_wrap(
                    text.as_str().to_owned(),
                    typing_font(),
                    egui::Color32::TRANSPARENT,
                )
            };
            let edit = egui::TextEdit::multiline(&mut self.input_text)
                .id(Self::input_id())
                .font(font)
                .frame(false)
                .margin(Margin::ZERO)
                .desired_width(rect.width())
                .desired_rows(line_count)
                .char_limit(self.tracker.reference().len())
                .lock_focus(true)
                .layouter(&mut layouter);
            let response = ui.put(rect, edit);

            if response.changed() {
                self.apply_input_change(ui.ctx());
            }
            if self.focus_input_next || response.clicked() {
                response.request_focus();
                self.focus_input_next = false;
            }
        });
    }
}
