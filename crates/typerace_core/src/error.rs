//! Application error types for configuration and reference text loading.
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read reference text from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Reference text is empty")]
    EmptyReferenceText,

    #[error("Invalid value for {name}: {value:?}")]
    InvalidSetting { name: String, value: String },
}

impl AppError {
    pub(crate) fn invalid_setting(name: &str, value: &str) -> Self {
        Self::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
