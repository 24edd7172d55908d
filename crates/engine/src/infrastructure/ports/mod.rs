//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Showtime persistence (the record store the scheduler commits through)
//! - Catalog persistence and reference checks (movies, rooms)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{MovieRepo, ReferenceValidator, RoomRepo, ShowtimeRepo};

// =============================================================================
// Types from types module (re-export for visibility)
// =============================================================================
pub use types::{BookedRange, EntityRef, ShowtimeListing};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockMovieRepo, MockReferenceValidator, MockRoomRepo, MockShowtimeRepo};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
