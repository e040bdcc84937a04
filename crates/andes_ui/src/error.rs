//! Component error types

use andes_theme::ThemeError;
use thiserror::Error;

/// Component-related errors
#[derive(Error, Debug)]
pub enum AndesError {
    /// A message was declared without its body text
    #[error("Body is a mandatory parameter")]
    MissingBody,

    /// A secondary message action was requested while the primary one is hidden
    #[error("Cannot initialize a secondary action without a primary one")]
    SecondaryActionWithoutPrimary,

    /// Markup could not be parsed
    #[error("Malformed markup: {0}")]
    Markup(String),

    /// Theme could not be loaded
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, AndesError>;
