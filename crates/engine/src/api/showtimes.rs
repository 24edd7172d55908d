//! Showtime routes. Every route is scoped to the authenticated user.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use cinemax_domain::ShowtimeId;
use std::sync::Arc;

use crate::app::App;

use super::auth::Auth;
use super::dto::{MessageResponse, ShowtimeRequest, ShowtimeResponse};
use super::http::ApiError;
use crate::use_cases::ScheduleError;

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/showtimes", get(list_showtimes).post(create_showtime))
        .route(
            "/api/showtimes/{id}",
            get(get_showtime).put(update_showtime).delete(delete_showtime),
        )
}

// Ids that do not parse cannot belong to the caller.
fn parse_showtime_id(raw: &str) -> Result<ShowtimeId, ApiError> {
    ShowtimeId::parse(raw).map_err(|_| ApiError::from(ScheduleError::NotFound))
}

async fn list_showtimes(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
) -> Result<Json<Vec<ShowtimeResponse>>, ApiError> {
    let listings = app.use_cases.showtime.ops.list(user).await?;
    Ok(Json(listings.iter().map(ShowtimeResponse::from).collect()))
}

async fn get_showtime(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    Path(id): Path<String>,
) -> Result<Json<ShowtimeResponse>, ApiError> {
    let id = parse_showtime_id(&id)?;
    let listing = app.use_cases.showtime.ops.get(id, user).await?;
    Ok(Json(ShowtimeResponse::from(&listing)))
}

async fn create_showtime(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    body: Result<Json<ShowtimeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShowtimeResponse>), ApiError> {
    let Json(request) = body?;
    let candidate = request.into_candidate()?;
    let showtime = app.use_cases.showtime.create.execute(candidate, user).await?;
    Ok((StatusCode::CREATED, Json(ShowtimeResponse::from(&showtime))))
}

async fn update_showtime(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    Path(id): Path<String>,
    body: Result<Json<ShowtimeRequest>, JsonRejection>,
) -> Result<Json<ShowtimeResponse>, ApiError> {
    let Json(request) = body?;
    let id = parse_showtime_id(&id)?;
    let patch = request.into_patch()?;
    let showtime = app
        .use_cases
        .showtime
        .update
        .execute(id, patch, user)
        .await?;
    Ok(Json(ShowtimeResponse::from(&showtime)))
}

async fn delete_showtime(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_showtime_id(&id)?;
    app.use_cases.showtime.ops.delete(id, user).await?;
    Ok(Json(MessageResponse::new("Showtime deleted successfully")))
}
