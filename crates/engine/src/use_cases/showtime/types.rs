//! Showtime scheduling inputs.

use chrono::{DateTime, Utc};
use cinemax_domain::{MovieId, RoomId};

/// A proposed new booking. Dates are raw; the scheduler normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowtimeCandidate {
    pub movie_id: MovieId,
    pub room_id: RoomId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Field-by-field changes to an existing booking. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowtimePatch {
    pub movie_id: Option<MovieId>,
    pub room_id: Option<RoomId>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
