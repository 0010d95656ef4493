//! Error types for Quartet.

use thiserror::Error;

/// Standard result type for Quartet.
pub type QuartetResult<T> = Result<T, QuartetError>;

/// Errors that can occur in Quartet.
#[derive(Error, Debug)]
pub enum QuartetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Path {0} is a directory, not a file")]
    PathIsDirectory(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
