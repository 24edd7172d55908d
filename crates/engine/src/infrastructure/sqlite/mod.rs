//! SQLite-backed record store and catalog.
//!
//! One pool is shared by every repository. Dates are stored as RFC 3339
//! strings with millisecond precision in UTC, ids as hyphenated UUIDs.

mod catalog_repo;
mod showtime_repo;

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};

use crate::infrastructure::ports::RepoError;

pub use catalog_repo::SqliteCatalogRepo;
pub use showtime_repo::SqliteShowtimeRepo;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS movies (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        director TEXT NOT NULL,
        genre TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL,
        release_year INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        capacity INTEGER NOT NULL,
        room_type TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS showtimes (
        id TEXT PRIMARY KEY,
        movie_id TEXT NOT NULL,
        room_id TEXT NOT NULL,
        owner_id TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_showtimes_room ON showtimes (room_id)",
    "CREATE INDEX IF NOT EXISTS idx_showtimes_owner ON showtimes (owner_id)",
];

/// All SQLite repositories sharing one pool.
pub struct SqliteRepositories {
    pub showtimes: Arc<SqliteShowtimeRepo>,
    pub catalog: Arc<SqliteCatalogRepo>,
}

impl SqliteRepositories {
    /// Open (creating if needed) the database file at `db_path`.
    pub async fn open(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database, for tests and throwaway runs.
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to a single connection that never expires.
    pub async fn in_memory() -> Result<Self, RepoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        ensure_schema(&pool).await?;
        Ok(Self {
            showtimes: Arc::new(SqliteShowtimeRepo::new(pool.clone())),
            catalog: Arc::new(SqliteCatalogRepo::new(pool)),
        })
    }
}

/// Create tables and indexes if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in SCHEMA {
        sqlx::query(*statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
    }
    tracing::debug!(statements = SCHEMA.len(), "SQLite schema ensured");
    Ok(())
}

/// Read `name` from `row`, reporting a type mismatch or a missing column as
/// `RepoError::Serialization`.
fn column<'r, T>(row: &'r SqliteRow, name: &'static str) -> Result<T, RepoError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepoError::serialization(format!("{name}: {e}")))
}

fn encode_datetime(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn decode_datetime(column: &'static str, raw: &str) -> Result<DateTime<Utc>, RepoError> {
    cinemax_domain::parse_datetime(raw)
        .map_err(|e| RepoError::serialization(format!("{column}: {e}")))
}

fn decode_uuid(column: &'static str, raw: &str) -> Result<uuid::Uuid, RepoError> {
    uuid::Uuid::parse_str(raw).map_err(|e| RepoError::serialization(format!("{column}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn datetime_encoding_round_trips_milliseconds() {
        let at = cinemax_domain::end_of_day(Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap());
        let encoded = encode_datetime(at);
        assert_eq!(encoded, "2025-06-10T23:59:59.999Z");
        assert_eq!(decode_datetime("end_time", &encoded).unwrap(), at);
    }

    #[test]
    fn corrupt_values_are_serialization_errors() {
        assert!(matches!(
            decode_datetime("start_time", "yesterday"),
            Err(RepoError::Serialization(_))
        ));
        assert!(matches!(
            decode_uuid("id", "42"),
            Err(RepoError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn schema_creation_is_repeatable() {
        let repos = SqliteRepositories::in_memory().await.unwrap();
        ensure_schema(repos.showtimes.pool()).await.unwrap();
    }

    #[tokio::test]
    async fn file_database_persists_between_opens() {
        use crate::infrastructure::ports::MovieRepo;
        use cinemax_domain::Movie;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cinemax.db");
        let path = path.to_str().unwrap();

        let movie = Movie::new("Persisted", 100, 2020, 2025).unwrap();
        {
            let repos = SqliteRepositories::open(path).await.unwrap();
            MovieRepo::save(repos.catalog.as_ref(), &movie).await.unwrap();
        }

        let reopened = SqliteRepositories::open(path).await.unwrap();
        let loaded = MovieRepo::get(reopened.catalog.as_ref(), movie.id).await.unwrap();
        assert_eq!(loaded, Some(movie));
    }
}
