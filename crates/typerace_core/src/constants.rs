//! Shared constants used across typerace crates.

/// Reference text used when neither a file nor inline text is configured.
pub const DEFAULT_REFERENCE_TEXT: &str =
    "The quick brown fox\njumps over the lazy dog.\nType Speed Race.";

/// Environment variable naming a reference text file.
pub const ENV_TEXT_FILE: &str = "TYPERACE_TEXT_FILE";
/// Environment variable carrying inline reference text.
pub const ENV_TEXT: &str = "TYPERACE_TEXT";
/// Environment variable selecting the line-break skip mode.
pub const ENV_SKIP_MODE: &str = "TYPERACE_SKIP_MODE";
/// Environment flag selecting truncation of typed positions on deletion.
pub const ENV_TRUNCATE_ON_DELETE: &str = "TYPERACE_TRUNCATE_ON_DELETE";
