//! Common utility functions shared across the CineMax crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for datetime utilities

pub mod datetime;

// Re-export commonly used functions at crate root for convenience
pub use datetime::{end_of_day, parse_datetime, parse_day_or_datetime, start_of_day};
