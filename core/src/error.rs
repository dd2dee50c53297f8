//! Error types

use thiserror::Error;

use crate::contact::Field;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown project category: {0}")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Reasons a contact submission is refused before it leaves `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("email address must look like name@domain")]
    InvalidEmail,

    #[error("a message is already being sent")]
    Busy,
}
