//! Catalog use cases.
//!
//! A minimal registry of movies and rooms, enough for showtimes to have
//! something to point at. Records referenced by a showtime cannot be deleted.

mod movie;
mod room;

use std::sync::Arc;

use cinemax_domain::{DomainError, ReferenceKind};

use crate::infrastructure::ports::RepoError;

pub use movie::{MovieCatalog, RegisterMovie};
pub use room::{RegisterRoom, RoomCatalog};

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub movies: Arc<MovieCatalog>,
    pub rooms: Arc<RoomCatalog>,
}

impl CatalogUseCases {
    pub fn new(movies: Arc<MovieCatalog>, rooms: Arc<RoomCatalog>) -> Self {
        Self { movies, rooms }
    }
}

/// Errors that can occur during catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(ReferenceKind),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Cannot delete {} because it is being used in one or more showtimes", .0.display_name().to_lowercase())]
    InUse(ReferenceKind),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_use_message_names_the_record() {
        assert_eq!(
            CatalogError::InUse(ReferenceKind::Movie).to_string(),
            "Cannot delete movie because it is being used in one or more showtimes"
        );
        assert_eq!(
            CatalogError::InUse(ReferenceKind::Room).to_string(),
            "Cannot delete room because it is being used in one or more showtimes"
        );
    }

    #[test]
    fn domain_errors_keep_their_message() {
        let err = CatalogError::from(DomainError::validation("Title is required"));
        assert_eq!(err.to_string(), "Title is required");
    }
}
