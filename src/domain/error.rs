use std::io;

use thiserror::Error;

/// Library-wide error type for vprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Attribute name does not match any prompt field.
    #[error("Unknown attribute '{0}'. Run 'vprompt fields' to list valid attributes")]
    UnknownAttribute(String),

    /// Field assignment is not of the form `attribute=value`.
    #[error("Invalid assignment '{0}': expected <attribute>=<value>")]
    InvalidAssignment(String),

    /// No built-in or user preset carries the requested id.
    #[error("Preset '{0}' not found")]
    PresetNotFound(String),

    /// Preset name is empty after trimming.
    #[error("Preset name must not be empty")]
    EmptyPresetName,

    /// Local key-value storage cannot be used.
    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Interactive prompt failed or was aborted.
    #[error("Interactive input failed: {0}")]
    Interaction(String),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
