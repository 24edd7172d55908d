//! Showtime entity - a room booked for a contiguous run of days
//!
//! A showtime is only ever constructed from a validated `BookingRange`, so
//! its bounds are always day-aligned and ordered. Conflict rules between
//! showtimes live in the engine's scheduler; this module only guarantees the
//! per-record invariants.

use std::fmt;

use crate::{BookingRange, MovieId, RoomId, ShowtimeId, UserId};

/// Which catalog entity a showtime points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Movie,
    Room,
}

impl ReferenceKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Room => "Room",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A validated booking that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowtimeDraft {
    pub movie_id: MovieId,
    pub room_id: RoomId,
    pub owner_id: UserId,
    pub range: BookingRange,
}

impl ShowtimeDraft {
    pub fn new(movie_id: MovieId, room_id: RoomId, owner_id: UserId, range: BookingRange) -> Self {
        Self {
            movie_id,
            room_id,
            owner_id,
            range,
        }
    }

    /// Attach the identifier chosen by the record store.
    pub fn into_showtime(self, id: ShowtimeId) -> Showtime {
        Showtime {
            id,
            movie_id: self.movie_id,
            room_id: self.room_id,
            owner_id: self.owner_id,
            range: self.range,
        }
    }
}

/// A persisted showtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showtime {
    id: ShowtimeId,
    movie_id: MovieId,
    room_id: RoomId,
    owner_id: UserId,
    range: BookingRange,
}

impl Showtime {
    /// Reconstruct a showtime from stored parts.
    pub fn from_parts(
        id: ShowtimeId,
        movie_id: MovieId,
        room_id: RoomId,
        owner_id: UserId,
        range: BookingRange,
    ) -> Self {
        Self {
            id,
            movie_id,
            room_id,
            owner_id,
            range,
        }
    }

    pub fn id(&self) -> ShowtimeId {
        self.id
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn range(&self) -> BookingRange {
        self.range
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    /// Apply already-validated changes. The owner never changes.
    pub fn with_changes(
        mut self,
        movie_id: MovieId,
        room_id: RoomId,
        range: BookingRange,
    ) -> Self {
        self.movie_id = movie_id;
        self.room_id = room_id;
        self.range = range;
        self
    }
}
