//! Showtime scheduling errors.

use cinemax_domain::{RangeViolation, ReferenceKind};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while scheduling a showtime.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("{0} does not exist")]
    ReferenceNotFound(ReferenceKind),
    #[error(transparent)]
    InvalidRange(#[from] RangeViolation),
    #[error("There is an overlapping showtime in this room for these dates")]
    OverlapConflict,
    #[error("Showtime not found or unauthorized")]
    NotFound,
    #[error("Showtime store unavailable: {0}")]
    StoreUnavailable(RepoError),
}

impl From<RepoError> for ScheduleError {
    fn from(err: RepoError) -> Self {
        match err {
            // A commit that lost the race against a conflicting write
            RepoError::Conflict(_) => Self::OverlapConflict,
            // The record vanished between the owner-scoped read and the commit
            RepoError::NotFound { .. } => Self::NotFound,
            other => Self::StoreUnavailable(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_wording() {
        assert_eq!(
            ScheduleError::ReferenceNotFound(ReferenceKind::Movie).to_string(),
            "Movie does not exist"
        );
        assert_eq!(
            ScheduleError::ReferenceNotFound(ReferenceKind::Room).to_string(),
            "Room does not exist"
        );
        assert_eq!(
            ScheduleError::from(RangeViolation::EndBeforeStart).to_string(),
            "End date must be greater than or equal to start date"
        );
    }

    #[test]
    fn store_conflict_becomes_overlap() {
        let err = ScheduleError::from(RepoError::conflict("room is booked"));
        assert!(matches!(err, ScheduleError::OverlapConflict));
    }

    #[test]
    fn other_store_failures_are_unavailable() {
        let err = ScheduleError::from(RepoError::database("find_in_room", "disk I/O error"));
        assert!(matches!(err, ScheduleError::StoreUnavailable(_)));
        assert!(err.to_string().contains("disk I/O error"));
    }
}
