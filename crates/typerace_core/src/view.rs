//! Pure per-character render derivation.
//!
//! Colours are recomputed from `(reference, input, typed)` on every frame;
//! nothing here caches state between calls.

use crate::text::ReferenceText;
use std::collections::BTreeSet;
use std::ops::Range;

/// Visual state of one reference character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharState {
    /// Never typed, or typed and later deleted.
    Neutral,
    /// Typed and equal to the reference character.
    Match,
    /// Typed and different from the reference character.
    Mismatch,
}

/// Classify every reference character.
///
/// An index renders `Match` or `Mismatch` only when it is marked typed and the
/// input still holds a character there; everything else is `Neutral`.
pub fn classify(
    reference: &ReferenceText,
    input: &[char],
    typed: &BTreeSet<usize>,
) -> Vec<CharState> {
    reference
        .as_chars()
        .iter()
        .enumerate()
        .map(|(index, expected)| {
            if !typed.contains(&index) {
                return CharState::Neutral;
            }
            match input.get(index) {
                Some(actual) if actual == expected => CharState::Match,
                Some(_) => CharState::Mismatch,
                None => CharState::Neutral,
            }
        })
        .collect()
}

/// Consecutive reference characters sharing one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub state: CharState,
    /// Char-index range into the reference text.
    pub range: Range<usize>,
    pub text: String,
}

/// Group classified characters into runs for the text overlay.
///
/// `states` must come from [`classify`] on the same reference.
pub fn styled_runs(reference: &ReferenceText, states: &[CharState]) -> Vec<StyledRun> {
    let mut runs: Vec<StyledRun> = Vec::new();
    for (index, (ch, state)) in reference.as_chars().iter().zip(states).enumerate() {
        match runs.last_mut() {
            Some(run) if run.state == *state => {
                run.range.end = index + 1;
                run.text.push(*ch);
            }
            _ => runs.push(StyledRun {
                state: *state,
                range: index..index + 1,
                text: ch.to_string(),
            }),
        }
    }
    runs
}
