//! CineMax Engine library.
//!
//! This crate contains all server-side code for the CineMax booking service.
//!
//! ## Structure
//!
//! - `use_cases/` - Showtime scheduling and catalog orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
