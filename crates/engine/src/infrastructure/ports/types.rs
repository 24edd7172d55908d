//! Helper types for port operations.

use cinemax_domain::{BookingRange, MovieId, ReferenceKind, RoomId, Showtime, ShowtimeId};

/// A typed pointer at a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Movie(MovieId),
    Room(RoomId),
}

impl EntityRef {
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Self::Movie(_) => ReferenceKind::Movie,
            Self::Room(_) => ReferenceKind::Room,
        }
    }

    /// Hyphenated id string, as stored.
    pub fn id_string(&self) -> String {
        match self {
            Self::Movie(id) => id.to_string(),
            Self::Room(id) => id.to_string(),
        }
    }
}

/// The slice of a stored showtime the overlap check needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedRange {
    pub id: ShowtimeId,
    pub range: BookingRange,
}

/// A stored showtime together with the display names of what it references.
///
/// The names are `None` when the movie or room has since been removed from
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowtimeListing {
    pub showtime: Showtime,
    pub movie_title: Option<String>,
    pub room_name: Option<String>,
}
