use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {key}")]
    NotFound {
        entity_type: &'static str,
        key: String,
    },
    /// An empty collection listing. Surfaced with the same not-found signal
    /// as a missing entity lookup.
    #[error("No {entity_type} records found")]
    Empty { entity_type: &'static str },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Person",
            key: "id 42".to_string(),
        };
        assert_eq!(error.to_string(), "Person not found: id 42");
    }

    #[test]
    fn test_repository_error_empty_display() {
        let error = RepositoryError::Empty {
            entity_type: "Person",
        };
        assert_eq!(error.to_string(), "No Person records found");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("malformed statement".to_string());
        assert_eq!(error.to_string(), "Query failed: malformed statement");
    }
}
