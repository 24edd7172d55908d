//! Domain entities - Core business objects with identity

mod movie;
mod room;
mod showtime;

pub use movie::Movie;
pub use room::{Room, RoomType};
pub use showtime::{ReferenceKind, Showtime, ShowtimeDraft};
