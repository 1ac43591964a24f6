//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[source] sqlx::Error),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Note not found (or not owned by the caller).
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// A user with this username or email already exists.
    #[error("{field} is already taken")]
    DuplicateUser { field: &'static str },

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &error {
            if db.is_unique_violation() {
                let field = match db.constraint() {
                    Some(name) if name.contains("email") => "email",
                    _ => "username",
                };
                return StoreError::DuplicateUser { field };
            }
        }
        StoreError::Connection(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_connection_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Connection(_)));
    }

    #[test]
    fn test_duplicate_user_message() {
        let err = StoreError::DuplicateUser { field: "email" };
        assert_eq!(err.to_string(), "email is already taken");
    }
}
