//! HTTP routes.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{CatalogError, ScheduleError};

use super::dto::MessageResponse;
use super::{catalog, showtimes};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .merge(showtimes::routes())
        .merge(catalog::routes())
}

async fn health() -> &'static str {
    "OK"
}

/// Failure of an HTTP request. Every variant renders as `{"message": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

// Malformed or mistyped bodies get the same envelope as every other 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ScheduleError> for ApiError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::ReferenceNotFound(_)
            | ScheduleError::InvalidRange(_)
            | ScheduleError::OverlapConflict => ApiError::BadRequest(e.to_string()),
            ScheduleError::NotFound => ApiError::NotFound(e.to_string()),
            ScheduleError::StoreUnavailable(source) => source.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CatalogError::InvalidInput(_) | CatalogError::InUse(_) => {
                ApiError::BadRequest(e.to_string())
            }
            CatalogError::Repo(source) => source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::USER_ID_HEADER;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::sqlite::SqliteRepositories;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use chrono::{TimeZone, Utc};
    use cinemax_domain::UserId;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn router() -> Router {
        let repos = SqliteRepositories::in_memory().await.unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap());
        let app = App::with_clock(repos, Arc::new(clock));
        routes().with_state(Arc::new(app))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        user: Option<UserId>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user.to_string());
        }
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn seed(router: &Router, user: UserId) -> (String, String, String) {
        let (status, movie) = send(
            router,
            Method::POST,
            "/api/movies",
            Some(user),
            Some(json!({"title": "Arrival", "duration": 116, "release_year": 2016})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let mut rooms = Vec::new();
        for name in ["R1", "R2"] {
            let (status, room) = send(
                router,
                Method::POST,
                "/api/rooms",
                Some(user),
                Some(json!({"name": name, "capacity": 100, "type": "2D"})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            rooms.push(room["id"].as_str().unwrap().to_string());
        }

        (
            movie["id"].as_str().unwrap().to_string(),
            rooms.remove(0),
            rooms.remove(0),
        )
    }

    fn showtime(movie: &str, room: &str, start: &str, end: &str) -> Value {
        json!({"movie_id": movie, "room_id": room, "start_time": start, "end_time": end})
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = router()
            .await
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn showtimes_require_identity() {
        let router = router().await;

        let (status, body) = send(&router, Method::GET, "/api/showtimes", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "No user id provided");

        let response = router
            .oneshot(
                Request::get("/api/showtimes")
                    .header(USER_ID_HEADER, "forged")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn showtime_lifecycle() {
        let router = router().await;
        let user = UserId::new();
        let (movie, r1, r2) = seed(&router, user).await;

        let (status, a) = send(
            &router,
            Method::POST,
            "/api/showtimes",
            Some(user),
            Some(showtime(&movie, &r1, "2025-06-10", "2025-06-10")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(a["start_time"], "2025-06-10T00:00:00.000Z");
        assert_eq!(a["end_time"], "2025-06-10T23:59:59.999Z");
        assert_eq!(a["user_id"], user.to_string());
        assert!(a.get("movie_title").is_none());

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/showtimes",
            Some(user),
            Some(showtime(&movie, &r1, "2025-06-10", "2025-06-12")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "There is an overlapping showtime in this room for these dates"
        );

        let (status, _) = send(
            &router,
            Method::POST,
            "/api/showtimes",
            Some(user),
            Some(showtime(&movie, &r2, "2025-06-10", "2025-06-12")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let a_uri = format!("/api/showtimes/{}", a["id"].as_str().unwrap());
        let (status, body) = send(
            &router,
            Method::PUT,
            &a_uri,
            Some(user),
            Some(json!({"end_time": "2025-06-09"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "End date must be greater than or equal to start date"
        );

        let (status, updated) = send(
            &router,
            Method::PUT,
            &a_uri,
            Some(user),
            Some(json!({"end_time": "2025-06-11"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["end_time"], "2025-06-11T23:59:59.999Z");

        let (status, list) = send(&router, Method::GET, "/api/showtimes", Some(user), None).await;
        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|item| item["movie_title"] == "Arrival"));
        let mut rooms: Vec<_> = list.iter().map(|item| item["room_name"].clone()).collect();
        rooms.sort_by_key(|name| name.to_string());
        assert_eq!(rooms, vec![json!("R1"), json!("R2")]);

        let (status, fetched) = send(&router, Method::GET, &a_uri, Some(user), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], a["id"]);
        assert_eq!(fetched["movie_id"], movie);
        assert_eq!(fetched["movie_title"], "Arrival");
        assert_eq!(fetched["room_name"], "R1");
        assert_eq!(fetched["end_time"], "2025-06-11T23:59:59.999Z");

        let (status, body) = send(&router, Method::DELETE, &a_uri, Some(user), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Showtime deleted successfully");

        let (status, body) = send(&router, Method::GET, &a_uri, Some(user), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Showtime not found or unauthorized");
    }

    #[tokio::test]
    async fn invalid_candidates_are_bad_requests() {
        let router = router().await;
        let user = UserId::new();
        let (movie, r1, _) = seed(&router, user).await;

        let cases = [
            (
                showtime(&movie, &r1, "2025-05-31", "2025-06-02"),
                "Start date must be today or in the future",
            ),
            (
                showtime(&movie, &UserId::new().to_string(), "2025-06-10", "2025-06-10"),
                "Room does not exist",
            ),
            (
                showtime("nope", &r1, "2025-06-10", "2025-06-10"),
                "Movie does not exist",
            ),
        ];
        for (body, message) in cases {
            let (status, response) =
                send(&router, Method::POST, "/api/showtimes", Some(user), Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["message"], message);
        }

        for (start, end) in [
            ("next tuesday", "2025-06-10"),
            ("+262142-12-31", "+262142-12-31"),
            ("2025-06-10", "10000-01-01"),
        ] {
            let (status, response) = send(
                &router,
                Method::POST,
                "/api/showtimes",
                Some(user),
                Some(showtime(&movie, &r1, start, end)),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{start}..{end}");
            assert!(response["message"].as_str().unwrap().starts_with("Invalid"));
        }
    }

    #[tokio::test]
    async fn malformed_bodies_use_the_message_envelope() {
        let router = router().await;
        let user = UserId::new();

        for (uri, body) in [
            ("/api/showtimes", "{\"movie_id\": "),
            ("/api/showtimes", "{\"start_time\": 20250610}"),
            ("/api/movies", "[]"),
            ("/api/rooms", "not json"),
        ] {
            let response = router
                .clone()
                .oneshot(
                    Request::post(uri)
                        .header(USER_ID_HEADER, user.to_string())
                        .header("content-type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let value: Value = serde_json::from_slice(&bytes).unwrap();
            assert!(value["message"].is_string());
        }

        // Missing content type
        let (status, body) = send(&router, Method::POST, "/api/showtimes", Some(user), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn showtimes_are_private_to_their_owner() {
        let router = router().await;
        let owner = UserId::new();
        let (movie, r1, _) = seed(&router, owner).await;

        let (_, created) = send(
            &router,
            Method::POST,
            "/api/showtimes",
            Some(owner),
            Some(showtime(&movie, &r1, "2025-06-10", "2025-06-10")),
        )
        .await;
        let uri = format!("/api/showtimes/{}", created["id"].as_str().unwrap());

        let stranger = UserId::new();
        let (status, _) = send(&router, Method::DELETE, &uri, Some(stranger), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, list) = send(&router, Method::GET, "/api/showtimes", Some(stranger), None).await;
        assert_eq!(list, json!([]));

        let (status, _) = send(&router, Method::GET, "/api/showtimes/123", Some(owner), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn catalog_rules_over_http() {
        let router = router().await;
        let user = UserId::new();
        let (movie, r1, _) = seed(&router, user).await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/rooms",
            Some(user),
            Some(json!({"name": "R1", "capacity": 10, "type": "VIP"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "The name of the room already exists");

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/movies",
            Some(user),
            Some(json!({"title": "Future", "duration": 90, "release_year": 2030})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Release year cannot be in the future");

        send(
            &router,
            Method::POST,
            "/api/showtimes",
            Some(user),
            Some(showtime(&movie, &r1, "2025-06-10", "2025-06-10")),
        )
        .await;

        let (status, body) = send(
            &router,
            Method::DELETE,
            &format!("/api/movies/{movie}"),
            Some(user),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Cannot delete movie because it is being used in one or more showtimes"
        );

        // Movies can be browsed without identity, rooms cannot
        let (status, movies) = send(&router, Method::GET, "/api/movies", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(movies.as_array().unwrap().len(), 1);
        let (status, _) = send(&router, Method::GET, "/api/rooms", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &router,
            Method::GET,
            &format!("/api/movies/{}", UserId::new()),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Movie not found");
    }
}
