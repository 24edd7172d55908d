//! API layer - HTTP entry points.

pub mod auth;
mod catalog;
pub mod dto;
pub mod http;
mod showtimes;

pub use auth::Auth;
pub use http::{routes, ApiError};
