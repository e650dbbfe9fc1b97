//! Core library for typerace (reference text, match tracking, render view).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across typerace crates.
pub mod constants;
/// Application error types.
pub mod error;
/// Reference text preparation and character classes.
pub mod text;
/// Typed-character matching state machine.
pub mod tracker;
/// Pure per-character render derivation.
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{Config, DeletionPolicy, SkipMode};
pub use error::AppError;
pub use text::ReferenceText;
pub use tracker::{KeyDisposition, MatchTracker, PassThroughKey};
pub use view::{CharState, StyledRun};
