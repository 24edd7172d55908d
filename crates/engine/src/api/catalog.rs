//! Movie and room routes.
//!
//! Movies can be browsed anonymously; everything else needs a user.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use cinemax_domain::{MovieId, ReferenceKind, RoomId};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::CatalogError;

use super::auth::Auth;
use super::dto::{MessageResponse, MovieRequest, MovieResponse, RoomRequest, RoomResponse};
use super::http::ApiError;

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/movies", get(list_movies).post(create_movie))
        .route("/api/movies/{id}", get(get_movie).delete(delete_movie))
        .route("/api/rooms", get(list_rooms).post(create_room))
        .route("/api/rooms/{id}", get(get_room).delete(delete_room))
}

fn parse_movie_id(raw: &str) -> Result<MovieId, ApiError> {
    MovieId::parse(raw).map_err(|_| CatalogError::NotFound(ReferenceKind::Movie).into())
}

fn parse_room_id(raw: &str) -> Result<RoomId, ApiError> {
    RoomId::parse(raw).map_err(|_| CatalogError::NotFound(ReferenceKind::Room).into())
}

// =============================================================================
// Movies
// =============================================================================

async fn list_movies(State(app): State<Arc<App>>) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let movies = app.use_cases.catalog.movies.list().await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

async fn get_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = app.use_cases.catalog.movies.get(parse_movie_id(&id)?).await?;
    Ok(Json(movie.into()))
}

async fn create_movie(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    body: Result<Json<MovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let Json(request) = body?;
    let movie = app.use_cases.catalog.movies.register(request.into()).await?;
    tracing::debug!(user_id = %user, movie_id = %movie.id, "Movie registered via HTTP");
    Ok((StatusCode::CREATED, Json(movie.into())))
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    Auth(_): Auth,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app.use_cases
        .catalog
        .movies
        .delete(parse_movie_id(&id)?)
        .await?;
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

// =============================================================================
// Rooms
// =============================================================================

async fn list_rooms(
    State(app): State<Arc<App>>,
    Auth(_): Auth,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = app.use_cases.catalog.rooms.list().await?;
    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

async fn get_room(
    State(app): State<Arc<App>>,
    Auth(_): Auth,
    Path(id): Path<String>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = app.use_cases.catalog.rooms.get(parse_room_id(&id)?).await?;
    Ok(Json(room.into()))
}

async fn create_room(
    State(app): State<Arc<App>>,
    Auth(_): Auth,
    body: Result<Json<RoomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let Json(request) = body?;
    let room = app
        .use_cases
        .catalog
        .rooms
        .register(request.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

async fn delete_room(
    State(app): State<Arc<App>>,
    Auth(_): Auth,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    app.use_cases.catalog.rooms.delete(parse_room_id(&id)?).await?;
    Ok(Json(MessageResponse::new("Room deleted successfully")))
}
