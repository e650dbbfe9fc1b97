//! Key interception ahead of the typing `TextEdit`.

use eframe::egui;
use typerace_core::{KeyDisposition, MatchTracker, PassThroughKey};

fn pass_through_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<PassThroughKey> {
    if modifiers.command || modifiers.alt {
        return None;
    }
    match key {
        egui::Key::Space => Some(PassThroughKey::Space),
        egui::Key::Enter => Some(PassThroughKey::Enter),
        _ => None,
    }
}

/// Offer Space/Enter presses to the tracker and drop the ones it consumed.
///
/// A suppressed Space also drops the `Text(" ")` event egui emits after the
/// key press, so the `TextEdit` never inserts a literal space or newline for
/// a line break the tracker already passed through.
///
/// # Returns
/// Number of key presses the tracker consumed.
pub(crate) fn route_pass_through_keys(
    events: &mut Vec<egui::Event>,
    tracker: &mut MatchTracker,
) -> usize {
    let mut suppressed = 0;
    let mut drop_space_text = false;
    events.retain(|event| match event {
        egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => {
            let Some(pass_key) = pass_through_key(*key, *modifiers) else {
                return true;
            };
            if tracker.handle_key(pass_key) == KeyDisposition::Suppress {
                suppressed += 1;
                drop_space_text = pass_key == PassThroughKey::Space;
                false
            } else {
                true
            }
        }
        egui::Event::Text(text) if drop_space_text && text == " " => {
            drop_space_text = false;
            false
        }
        _ => true,
    });
    suppressed
}

#[cfg(test)]
mod tests {
    use super::*;
    use typerace_core::{DeletionPolicy, ReferenceText, SkipMode};

    fn key_press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn tracker_at_line_end() -> MatchTracker {
        let mut tracker = MatchTracker::new(
            ReferenceText::new("ab\ncd"),
            SkipMode::Whitespace,
            DeletionPolicy::Retain,
        );
        tracker.apply_input("ab");
        tracker
    }

    #[test]
    fn suppressed_space_drops_key_and_text_events() {
        let mut tracker = tracker_at_line_end();
        let mut events = vec![
            key_press(egui::Key::Space),
            egui::Event::Text(" ".to_string()),
        ];

        let suppressed = route_pass_through_keys(&mut events, &mut tracker);
        assert_eq!(suppressed, 1);
        assert!(events.is_empty());
        assert_eq!(tracker.input(), "ab\n");
    }

    #[test]
    fn suppressed_enter_drops_only_the_key_event() {
        let mut tracker = tracker_at_line_end();
        let mut events = vec![
            key_press(egui::Key::Enter),
            egui::Event::Text("c".to_string()),
        ];

        let suppressed = route_pass_through_keys(&mut events, &mut tracker);
        assert_eq!(suppressed, 1);
        assert_eq!(events, vec![egui::Event::Text("c".to_string())]);
    }

    #[test]
    fn space_mid_line_is_left_for_the_text_edit() {
        let mut tracker = MatchTracker::new(
            ReferenceText::new("a b"),
            SkipMode::Whitespace,
            DeletionPolicy::Retain,
        );
        tracker.apply_input("a");
        let mut events = vec![
            key_press(egui::Key::Space),
            egui::Event::Text(" ".to_string()),
        ];

        let suppressed = route_pass_through_keys(&mut events, &mut tracker);
        assert_eq!(suppressed, 0);
        assert_eq!(events.len(), 2);
        assert_eq!(tracker.input(), "a");
    }

    #[test]
    fn command_modified_keys_are_ignored() {
        let mut tracker = tracker_at_line_end();
        let mut events = vec![egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers {
                command: true,
                ..Default::default()
            },
        }];

        assert_eq!(route_pass_through_keys(&mut events, &mut tracker), 0);
        assert_eq!(events.len(), 1);
        assert_eq!(tracker.input(), "ab");
    }

    #[test]
    fn second_press_after_pass_through_reaches_the_text_edit() {
        let mut tracker = tracker_at_line_end();
        let mut events = vec![
            key_press(egui::Key::Space),
            egui::Event::Text(" ".to_string()),
            key_press(egui::Key::Space),
            egui::Event::Text(" ".to_string()),
        ];

        let suppressed = route_pass_through_keys(&mut events, &mut tracker);
        assert_eq!(suppressed, 1);
        assert_eq!(events.len(), 2);
        assert_eq!(tracker.input(), "ab\n");
    }
}
