//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file could not be read
    #[error("Failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme TOML is malformed or has invalid values
    #[error("Invalid theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme could not be written out
    #[error("Failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The global theme state was already set
    #[error("ThemeState is already initialized")]
    AlreadyInitialized,
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
