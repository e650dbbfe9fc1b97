//! Typed-character matching state machine.
//!
//! The tracker owns two pieces of state: the input buffer the user has
//! produced and the set of reference positions marked as typed. The input
//! surface reports every full-buffer change through
//! [`MatchTracker::apply_input`] and offers each Space/Enter press to
//! [`MatchTracker::handle_key`] before inserting it.
//!
//! Line breaks in the reference text are handled according to [`SkipMode`]:
//! - `Off`: the user types line breaks like any other character.
//! - `LineBreak`: typing a character where a line break is due injects the
//!   break first, then places the character after it.
//! - `Whitespace`: the injection also covers further blank lines and the next
//!   line's leading indentation.

use crate::config::{Config, DeletionPolicy, SkipMode};
use crate::text::{is_line_break, ReferenceText};
use crate::view::{classify, CharState};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Keys that may pass through a line break instead of being inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThroughKey {
    Space,
    Enter,
}

/// Whether the input surface should run its default handling for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The tracker advanced the buffer itself; drop the key's default insertion.
    Suppress,
    /// Let the key through untouched.
    PassThrough,
}

/// Summary of one [`MatchTracker::apply_input`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// Characters copied from the reference without being typed.
    pub injected: usize,
    /// Typed characters discarded because the buffer was full.
    pub dropped: usize,
}

impl InputOutcome {
    /// Whether the tracked buffer now differs from the value the surface reported.
    pub fn rewrites_input(&self) -> bool {
        self.injected > 0 || self.dropped > 0
    }
}

/// Input buffer plus typed positions for one reference text.
#[derive(Debug, Clone)]
pub struct MatchTracker {
    reference: ReferenceText,
    input: Vec<char>,
    typed: BTreeSet<usize>,
    skip_mode: SkipMode,
    deletion_policy: DeletionPolicy,
}

impl MatchTracker {
    pub fn new(
        reference: ReferenceText,
        skip_mode: SkipMode,
        deletion_policy: DeletionPolicy,
    ) -> Self {
        Self {
            reference,
            input: Vec::new(),
            typed: BTreeSet::new(),
            skip_mode,
            deletion_policy,
        }
    }

    /// Build a tracker for the configured reference text and policies.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ReferenceText::new(&config.reference_text),
            config.skip_mode,
            config.deletion_policy,
        )
    }

    pub fn reference(&self) -> &ReferenceText {
        &self.reference
    }

    pub fn skip_mode(&self) -> SkipMode {
        self.skip_mode
    }

    pub fn deletion_policy(&self) -> DeletionPolicy {
        self.deletion_policy
    }

    /// Current input buffer as characters.
    pub fn input_chars(&self) -> &[char] {
        &self.input
    }

    /// Current input buffer as a string.
    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    /// Reference positions marked as typed, in ascending order.
    pub fn typed_positions(&self) -> &BTreeSet<usize> {
        &self.typed
    }

    /// Index of the next reference position to fill.
    pub fn caret(&self) -> usize {
        self.input.len()
    }

    /// Whether every reference position has been filled.
    pub fn is_complete(&self) -> bool {
        self.input.len() == self.reference.len()
    }

    /// Clear the buffer and all marks.
    pub fn reset(&mut self) {
        self.input.clear();
        self.typed.clear();
    }

    /// Apply a full-buffer change reported by the input surface.
    ///
    /// A longer value is treated as typing: the characters past the previous
    /// length are placed one at a time, injecting line breaks as the skip mode
    /// requires. A value of the same length or shorter replaces the buffer
    /// without marking anything.
    pub fn apply_input(&mut self, new_value: &str) -> InputOutcome {
        let new_chars: Vec<char> = new_value.chars().collect();
        let previous_len = self.input.len();
        let mut outcome = InputOutcome::default();

        if new_chars.len() <= previous_len {
            self.input = new_chars;
            if self.deletion_policy == DeletionPolicy::Truncate {
                let _ = self.typed.split_off(&self.input.len());
            }
            trace!(
                len = self.input.len(),
                previous_len,
                "input shrank or was replaced"
            );
            return outcome;
        }

        // Keep edits made before the caret; only the tail counts as typing.
        self.input.clear();
        self.input.extend_from_slice(&new_chars[..previous_len]);
        for &ch in &new_chars[previous_len..] {
            self.place_typed(ch, &mut outcome);
        }
        if outcome.rewrites_input() {
            debug!(
                injected = outcome.injected,
                dropped = outcome.dropped,
                caret = self.caret(),
                "input rewritten by tracker"
            );
        }
        outcome
    }

    /// Offer a Space/Enter press before the surface inserts it.
    ///
    /// When a line break is due at the caret the tracker injects it (plus any
    /// blank run in `Whitespace` mode) and asks the surface to drop the key.
    pub fn handle_key(&mut self, key: PassThroughKey) -> KeyDisposition {
        let caret = self.caret();
        if self.skip_mode == SkipMode::Off || !self.reference.is_line_break_at(caret) {
            return KeyDisposition::PassThrough;
        }
        let injected = self.pass_through_line_break();
        debug!(?key, caret, injected, "passed through line break");
        KeyDisposition::Suppress
    }

    /// Colour state of every reference character.
    pub fn char_states(&self) -> Vec<CharState> {
        classify(&self.reference, &self.input, &self.typed)
    }

    fn place_typed(&mut self, ch: char, outcome: &mut InputOutcome) {
        let index = self.input.len();
        if index >= self.reference.len() {
            outcome.dropped += 1;
            return;
        }
        if self.skip_mode == SkipMode::Off || !self.reference.is_line_break_at(index) {
            self.push_marked(ch);
            return;
        }
        if is_line_break(ch) {
            outcome.injected += self.pass_through_line_break().saturating_sub(1);
            return;
        }
        match self.skip_mode {
            SkipMode::LineBreak => {
                self.push_reference(index, false);
                outcome.injected += 1;
            }
            SkipMode::Whitespace => {
                let end = self.reference.next_visible_from(index);
                for skipped in index..end {
                    self.push_reference(skipped, true);
                }
                outcome.injected += end - index;
            }
            SkipMode::Off => {}
        }
        if self.input.len() < self.reference.len() {
            self.push_marked(ch);
        } else {
            outcome.dropped += 1;
        }
    }

    /// Inject the line break at the caret, marking every injected position.
    fn pass_through_line_break(&mut self) -> usize {
        let start = self.caret();
        let end = match self.skip_mode {
            SkipMode::Whitespace => self.reference.next_visible_from(start),
            SkipMode::LineBreak | SkipMode::Off => start + 1,
        };
        for index in start..end {
            self.push_reference(index, true);
        }
        end - start
    }

    fn push_marked(&mut self, ch: char) {
        self.typed.insert(self.input.len());
        self.input.push(ch);
    }

    fn push_reference(&mut self, index: usize, mark: bool) {
        if let Some(ch) = self.reference.get(index) {
            if mark {
                self.typed.insert(index);
            }
            self.input.push(ch);
        }
    }
}
