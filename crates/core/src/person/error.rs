use thiserror::Error;

/// Errors that can occur when validating a person payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonError {
    #[error("Person name cannot be empty")]
    EmptyName,
    #[error("Person name too long (max 100 characters)")]
    NameTooLong,
}
