//! Request and response bodies for the HTTP API.

use chrono::{DateTime, SecondsFormat, Utc};
use cinemax_domain::{
    parse_day_or_datetime, Movie, MovieId, ReferenceKind, Room, RoomId, RoomType, Showtime,
};
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::ShowtimeListing;
use crate::use_cases::catalog::{RegisterMovie, RegisterRoom};
use crate::use_cases::showtime::{ShowtimeCandidate, ShowtimePatch};
use crate::use_cases::ScheduleError;

use super::http::ApiError;

// =============================================================================
// Showtimes
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ShowtimeRequest {
    pub movie_id: Option<String>,
    pub room_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl ShowtimeRequest {
    pub fn into_candidate(self) -> Result<ShowtimeCandidate, ApiError> {
        let movie_id = parse_movie_ref(self.movie_id.as_deref().unwrap_or_default())?;
        let room_id = parse_room_ref(self.room_id.as_deref().unwrap_or_default())?;
        let start = parse_date("start_time", present(self.start_time))?
            .ok_or_else(|| ApiError::BadRequest("start_time is required".into()))?;
        let end = parse_date("end_time", present(self.end_time))?
            .ok_or_else(|| ApiError::BadRequest("end_time is required".into()))?;

        Ok(ShowtimeCandidate {
            movie_id,
            room_id,
            start,
            end,
        })
    }

    /// Blank fields are left unchanged.
    pub fn into_patch(self) -> Result<ShowtimePatch, ApiError> {
        Ok(ShowtimePatch {
            movie_id: present(self.movie_id)
                .map(|raw| parse_movie_ref(&raw))
                .transpose()?,
            room_id: present(self.room_id)
                .map(|raw| parse_room_ref(&raw))
                .transpose()?,
            start: parse_date("start_time", present(self.start_time))?,
            end: parse_date("end_time", present(self.end_time))?,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// An id that cannot name a record names no record.
fn parse_movie_ref(raw: &str) -> Result<MovieId, ScheduleError> {
    MovieId::parse(raw).map_err(|_| ScheduleError::ReferenceNotFound(ReferenceKind::Movie))
}

fn parse_room_ref(raw: &str) -> Result<RoomId, ScheduleError> {
    RoomId::parse(raw).map_err(|_| ScheduleError::ReferenceNotFound(ReferenceKind::Room))
}

fn parse_date(field: &str, raw: Option<String>) -> Result<Option<DateTime<Utc>>, ApiError> {
    raw.map(|value| {
        parse_day_or_datetime(&value)
            .map_err(|_| ApiError::BadRequest(format!("Invalid {field}: {value}")))
    })
    .transpose()
}

fn format_date(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Listing reads (`GET`) add `movie_title` and `room_name`; write responses
/// carry ids only.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShowtimeResponse {
    pub id: String,
    pub movie_id: String,
    pub room_id: String,
    pub user_id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
}

impl From<&Showtime> for ShowtimeResponse {
    fn from(showtime: &Showtime) -> Self {
        Self {
            id: showtime.id().to_string(),
            movie_id: showtime.movie_id().to_string(),
            room_id: showtime.room_id().to_string(),
            user_id: showtime.owner_id().to_string(),
            start_time: format_date(showtime.range().start()),
            end_time: format_date(showtime.range().end()),
            movie_title: None,
            room_name: None,
        }
    }
}

impl From<&ShowtimeListing> for ShowtimeResponse {
    fn from(listing: &ShowtimeListing) -> Self {
        Self {
            movie_title: listing.movie_title.clone(),
            room_name: listing.room_name.clone(),
            ..Self::from(&listing.showtime)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub title: String,
    pub director: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub duration: i64,
    pub release_year: Option<i32>,
}

impl From<MovieRequest> for RegisterMovie {
    fn from(request: MovieRequest) -> Self {
        Self {
            title: request.title,
            director: request.director,
            genre: request.genre,
            duration_minutes: request.duration,
            release_year: request.release_year,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub duration: u32,
    pub release_year: i32,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title,
            director: movie.director,
            genre: movie.genre,
            duration: movie.duration_minutes,
            release_year: movie.release_year,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capacity: i64,
    #[serde(rename = "type", default)]
    pub room_type: String,
}

impl RoomRequest {
    pub fn into_input(self) -> Result<RegisterRoom, ApiError> {
        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(RegisterRoom {
            name: self.name,
            capacity: self.capacity,
            room_type,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub room_type: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
            capacity: room.capacity,
            room_type: room.room_type.to_string(),
        }
    }
}
