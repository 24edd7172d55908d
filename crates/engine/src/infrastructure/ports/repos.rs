//! Repository port traits for database access.

use async_trait::async_trait;
use cinemax_domain::{Movie, MovieId, Room, RoomId, Showtime, ShowtimeDraft, ShowtimeId, UserId};

use super::error::RepoError;
use super::types::{BookedRange, EntityRef, ShowtimeListing};

// =============================================================================
// Showtime Record Store
// =============================================================================

/// Persistence for showtimes.
///
/// `commit_create` and `commit_update` must be at-most-one-succeeds for
/// overlapping bookings in the same room: when two conflicting writes race,
/// the loser gets `RepoError::Conflict` and nothing of it is stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowtimeRepo: Send + Sync {
    // Owner-scoped reads
    async fn get_owned(&self, id: ShowtimeId, owner: UserId)
        -> Result<Option<Showtime>, RepoError>;

    /// Listing reads carry the movie title and room name alongside the record.
    async fn get_listing(
        &self,
        id: ShowtimeId,
        owner: UserId,
    ) -> Result<Option<ShowtimeListing>, RepoError>;
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<ShowtimeListing>, RepoError>;

    /// Every booking in `room_id`, minus `exclude` when given.
    async fn find_in_room(
        &self,
        room_id: RoomId,
        exclude: Option<ShowtimeId>,
    ) -> Result<Vec<BookedRange>, RepoError>;

    // Commits
    async fn commit_create(&self, draft: &ShowtimeDraft) -> Result<Showtime, RepoError>;
    async fn commit_update(&self, showtime: &Showtime) -> Result<(), RepoError>;

    /// Returns false when nothing matched `id` for `owner`.
    async fn delete_owned(&self, id: ShowtimeId, owner: UserId) -> Result<bool, RepoError>;

    /// How many showtimes point at the given movie or room.
    async fn count_referencing(&self, reference: EntityRef) -> Result<u64, RepoError>;
}

// =============================================================================
// Catalog Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceValidator: Send + Sync {
    async fn exists(&self, reference: EntityRef) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    async fn get(&self, id: MovieId) -> Result<Option<Movie>, RepoError>;
    async fn list(&self) -> Result<Vec<Movie>, RepoError>;
    async fn save(&self, movie: &Movie) -> Result<(), RepoError>;
    async fn delete(&self, id: MovieId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepo: Send + Sync {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, RepoError>;
    async fn list(&self) -> Result<Vec<Room>, RepoError>;
    /// Fails with `RepoError::ConstraintViolation` when the name is taken.
    async fn save(&self, room: &Room) -> Result<(), RepoError>;
    async fn delete(&self, id: RoomId) -> Result<(), RepoError>;
}
