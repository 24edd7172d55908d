extern crate self as cinemax_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Movie, ReferenceKind, Room, RoomType, Showtime, ShowtimeDraft};

pub use error::DomainError;

// Re-export ID types
pub use ids::{MovieId, RoomId, ShowtimeId, UserId};

// Re-export value objects
pub use value_objects::{require_not_past, BookingRange, RangeViolation};

// Re-export date helpers
pub use common::{end_of_day, parse_datetime, parse_day_or_datetime, start_of_day};
