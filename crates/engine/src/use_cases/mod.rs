//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across port traits to fulfill user stories.

pub mod catalog;
pub mod showtime;

// Re-export main types
pub use catalog::{CatalogError, CatalogUseCases};
pub use showtime::{ScheduleError, ShowtimeUseCases};
