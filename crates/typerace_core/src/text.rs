//! Reference text preparation and the character classes the tracker skips over.

use crate::AppError;

/// Return `true` for characters that end a line of reference text.
pub fn is_line_break(ch: char) -> bool {
    ch == '\n'
}

/// Return `true` for whitespace that does not end a line (spaces, tabs).
pub fn is_horizontal_whitespace(ch: char) -> bool {
    ch.is_whitespace() && !is_line_break(ch)
}

/// Normalize line endings to `\n` and drop trailing whitespace.
///
/// A trailing line break can never be filled once the input is capped at the
/// reference length, so the prepared text always ends on a visible character.
///
/// # Returns
/// The normalized text, or [`AppError::EmptyReferenceText`] when nothing
/// visible remains.
pub fn prepare_reference_text(raw: &str) -> Result<String, AppError> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = normalized.trim_end();
    if trimmed.trim_start().is_empty() {
        return Err(AppError::EmptyReferenceText);
    }
    Ok(trimmed.to_string())
}

/// Immutable character sequence the user must reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceText {
    chars: Vec<char>,
}

impl ReferenceText {
    /// Build a reference from already-prepared text.
    ///
    /// No normalization is applied; use [`prepare_reference_text`] for input
    /// coming from files or the environment.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters in the reference.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the reference holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Whether `index` holds a line break.
    pub fn is_line_break_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(is_line_break)
    }

    /// Borrow the characters as a slice.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// First index at or after `start` that is neither a line break nor
    /// horizontal whitespace, or `len()` when the rest of the text is blank.
    pub fn next_visible_from(&self, start: usize) -> usize {
        let mut index = start.min(self.len());
        while index < self.len() {
            let ch = self.chars[index];
            if !is_line_break(ch) && !is_horizontal_whitespace(ch) {
                break;
            }
            index += 1;
        }
        index
    }
}

impl std::fmt::Display for ReferenceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
