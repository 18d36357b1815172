//! Settings-layer error types with clear, actionable messages.
//!
//! Filtering itself is infallible; only loading and saving stored settings
//! can fail, and every failure names the file it happened on.

use thiserror::Error;

/// Errors that can occur while loading or saving stored settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a YAML mapping of toggle names to values.
    #[error("settings file {path} is malformed: {details}")]
    Malformed { path: String, details: String },

    /// The settings file exceeds the size cap for configuration data.
    #[error("settings file {path} is {size} bytes, above the {limit} byte limit")]
    TooLarge { path: String, size: u64, limit: u64 },
}

/// Result type alias using SettingsError.
pub type SettingsResult<T> = Result<T, SettingsError>;
