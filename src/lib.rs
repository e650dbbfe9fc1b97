//! Root crate facade for typerace.

pub use typerace_core::{
    config, constants, error, text, tracker, view, AppError, CharState, Config, DeletionPolicy,
    KeyDisposition, MatchTracker, PassThroughKey, ReferenceText, SkipMode, StyledRun,
};
