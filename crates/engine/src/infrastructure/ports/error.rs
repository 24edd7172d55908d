//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored data could not be decoded into domain types.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Uniqueness constraint violated (e.g. duplicate room name).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A conflicting booking was committed first; this write lost.
    #[error("Booking conflict: {0}")]
    Conflict(String),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a ConstraintViolation error.
    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    /// Create a Conflict error.
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict(message.to_string())
    }

    /// Check if this write lost a booking race.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_includes_context() {
        let err = RepoError::not_found("Showtime", "abc");
        assert!(matches!(err, RepoError::NotFound { .. }));
        assert_eq!(err.to_string(), "Showtime not found: abc");
    }

    #[test]
    fn database_includes_operation() {
        let err = RepoError::database("commit_create", "disk I/O error");
        assert_eq!(
            err.to_string(),
            "Database error in commit_create: disk I/O error"
        );
        assert!(!err.is_conflict());
    }

    #[test]
    fn conflict_is_detectable() {
        assert!(RepoError::conflict("room busy").is_conflict());
    }
}
