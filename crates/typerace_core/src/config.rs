//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_REFERENCE_TEXT, ENV_SKIP_MODE, ENV_TEXT, ENV_TEXT_FILE, ENV_TRUNCATE_ON_DELETE,
};
use crate::text::prepare_reference_text;
use crate::AppError;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// How the tracker treats line breaks in the reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipMode {
    /// Every typed character fills the next slot; line breaks must be typed.
    Off,
    /// A single line break is injected ahead of the typed character.
    LineBreak,
    /// Line breaks and the next line's leading whitespace are injected.
    #[default]
    Whitespace,
}

impl SkipMode {
    /// Stable lowercase name used by the CLI and environment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::LineBreak => "line-break",
            Self::Whitespace => "whitespace",
        }
    }
}

impl FromStr for SkipMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "line-break" | "linebreak" | "newline" => Ok(Self::LineBreak),
            "whitespace" | "full" => Ok(Self::Whitespace),
            _ => Err(AppError::invalid_setting(ENV_SKIP_MODE, value)),
        }
    }
}

impl std::fmt::Display for SkipMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to typed positions past the buffer end after a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletionPolicy {
    /// Keep the marks; they render neutral until the slot is refilled.
    #[default]
    Retain,
    /// Drop every mark at or beyond the new buffer length.
    Truncate,
}

/// Runtime configuration for typerace.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub reference_text: String,
    pub skip_mode: SkipMode,
    pub deletion_policy: DeletionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_text: DEFAULT_REFERENCE_TEXT.to_string(),
            skip_mode: SkipMode::default(),
            deletion_policy: DeletionPolicy::default(),
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn resolve_home_dir() -> Option<PathBuf> {
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(home) = env::var(key) {
            if !home.trim().is_empty() {
                return Some(PathBuf::from(home));
            }
        }
    }
    None
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Read the reference text from a file and prepare it for tracking.
///
/// # Errors
/// Returns [`AppError::Io`] when the file cannot be read and
/// [`AppError::EmptyReferenceText`] when it holds no visible text.
pub fn load_reference_file(path: &Path) -> Result<String, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = prepare_reference_text(&raw)?;
    info!(
        "loaded reference text from {} ({} chars)",
        path.display(),
        text.chars().count()
    );
    Ok(text)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A text file wins over inline text; with neither set, the built-in
    /// sample text is used.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    ///
    /// # Errors
    /// Returns an error when the text file cannot be read, the text is blank,
    /// or a setting holds an unrecognized value.
    pub fn from_env() -> Result<Self, AppError> {
        let reference_text = match (env_nonempty(ENV_TEXT_FILE), env_nonempty(ENV_TEXT)) {
            (Some(path), _) => load_reference_file(&expand_tilde(path.trim()))?,
            (None, Some(inline)) => prepare_reference_text(&inline)?,
            (None, None) => DEFAULT_REFERENCE_TEXT.to_string(),
        };
        let skip_mode = match env_nonempty(ENV_SKIP_MODE) {
            Some(value) => value.parse()?,
            None => SkipMode::default(),
        };
        let deletion_policy = match env::var(ENV_TRUNCATE_ON_DELETE) {
            Ok(value) => match parse_env_flag(&value) {
                Some(true) => DeletionPolicy::Truncate,
                Some(false) => DeletionPolicy::Retain,
                None => return Err(AppError::invalid_setting(ENV_TRUNCATE_ON_DELETE, &value)),
            },
            Err(_) => DeletionPolicy::default(),
        };
        Ok(Self {
            reference_text,
            skip_mode,
            deletion_policy,
        })
    }

    /// Replace the reference text with the contents of `path`.
    ///
    /// # Errors
    /// See [`load_reference_file`].
    pub fn set_text_file(&mut self, path: &str) -> Result<(), AppError> {
        self.reference_text = load_reference_file(&expand_tilde(path))?;
        Ok(())
    }

    /// Replace the reference text with inline text.
    ///
    /// # Errors
    /// Returns [`AppError::EmptyReferenceText`] for blank text.
    pub fn set_inline_text(&mut self, text: &str) -> Result<(), AppError> {
        self.reference_text = prepare_reference_text(text)?;
        Ok(())
    }
}
