//! Pure functions for mapping domain errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`]
//! and [`PersonError`] variants, following the Functional Core pattern -
//! pure functions with no side effects.

use crate::person::PersonError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Empty` -> 404 (Not Found; an empty listing is reported the same way
///   as a missing entity)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Empty { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
    }
}

/// Maps a [`PersonError`] to an HTTP status code.
///
/// Every validation failure is a 422 (Unprocessable Entity), surfaced
/// before any persistence action is attempted.
pub fn person_error_to_status_code(error: &PersonError) -> u16 {
    match error {
        PersonError::EmptyName => 422,
        PersonError::NameTooLong => 422,
    }
}
