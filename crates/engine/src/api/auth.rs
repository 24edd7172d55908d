//! Identity extraction for HTTP routes.
//!
//! Authentication happens upstream; by the time a request reaches the engine
//! the caller's id sits in the `X-User-Id` header.
//!
//! ```rust,ignore
//! async fn handler(Auth(user): Auth) -> impl IntoResponse {
//!     format!("User ID: {}", user)
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use cinemax_domain::UserId;

use super::http::ApiError;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extractor for the authenticated user.
///
/// A missing header is rejected with 401, one that is not a user id with 403.
#[derive(Debug, Clone, Copy)]
pub struct Auth(pub UserId);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(ApiError::Unauthorized("No user id provided"))?;

        raw.to_str()
            .ok()
            .and_then(|value| UserId::parse(value).ok())
            .map(Auth)
            .ok_or(ApiError::Forbidden("Invalid user id"))
    }
}
