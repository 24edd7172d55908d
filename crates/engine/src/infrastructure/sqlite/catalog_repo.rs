//! SQLite-backed movie and room catalog.

use async_trait::async_trait;
use cinemax_domain::{Movie, MovieId, Room, RoomId, RoomType};
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use super::{column, decode_uuid};
use crate::infrastructure::ports::{EntityRef, MovieRepo, ReferenceValidator, RepoError, RoomRepo};

/// SQLite implementation for movies, rooms and reference checks.
pub struct SqliteCatalogRepo {
    pool: SqlitePool,
}

impl SqliteCatalogRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn movie_from_row(row: &SqliteRow) -> Result<Movie, RepoError> {
    let id: String = column(row, "id")?;
    let duration: i64 = column(row, "duration_minutes")?;
    Ok(Movie {
        id: MovieId::from_uuid(decode_uuid("id", &id)?),
        title: column(row, "title")?,
        director: column(row, "director")?,
        genre: column(row, "genre")?,
        duration_minutes: u32::try_from(duration)
            .map_err(|e| RepoError::serialization(format!("duration_minutes: {e}")))?,
        release_year: column(row, "release_year")?,
    })
}

fn room_from_row(row: &SqliteRow) -> Result<Room, RepoError> {
    let id: String = column(row, "id")?;
    let capacity: i64 = column(row, "capacity")?;
    let room_type: String = column(row, "room_type")?;
    Ok(Room {
        id: RoomId::from_uuid(decode_uuid("id", &id)?),
        name: column(row, "name")?,
        capacity: u32::try_from(capacity)
            .map_err(|e| RepoError::serialization(format!("capacity: {e}")))?,
        room_type: room_type
            .parse::<RoomType>()
            .map_err(|e| RepoError::serialization(format!("room_type: {e}")))?,
    })
}

#[async_trait]
impl ReferenceValidator for SqliteCatalogRepo {
    async fn exists(&self, reference: EntityRef) -> Result<bool, RepoError> {
        let query = match reference {
            EntityRef::Movie(_) => "SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?)",
            EntityRef::Room(_) => "SELECT EXISTS(SELECT 1 FROM rooms WHERE id = ?)",
        };
        let found: bool = sqlx::query_scalar(query)
            .bind(reference.id_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("exists", e))?;
        Ok(found)
    }
}

#[async_trait]
impl MovieRepo for SqliteCatalogRepo {
    async fn get(&self, id: MovieId) -> Result<Option<Movie>, RepoError> {
        let row = sqlx::query("SELECT * FROM movies WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_movie", e))?;
        row.as_ref().map(movie_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        let rows = sqlx::query("SELECT * FROM movies ORDER BY title, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_movies", e))?;
        rows.iter().map(movie_from_row).collect()
    }

    async fn save(&self, movie: &Movie) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO movies (id, title, director, genre, duration_minutes, release_year)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                director = excluded.director,
                genre = excluded.genre,
                duration_minutes = excluded.duration_minutes,
                release_year = excluded.release_year
            "#,
        )
        .bind(movie.id.to_string())
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(&movie.genre)
        .bind(i64::from(movie.duration_minutes))
        .bind(movie.release_year)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_movie", e))?;
        Ok(())
    }

    async fn delete(&self, id: MovieId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_movie", e))?;
        Ok(())
    }
}

#[async_trait]
impl RoomRepo for SqliteCatalogRepo {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, RepoError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_room", e))?;
        row.as_ref().map(room_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Room>, RepoError> {
        let rows = sqlx::query("SELECT * FROM rooms ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_rooms", e))?;
        rows.iter().map(room_from_row).collect()
    }

    async fn save(&self, room: &Room) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO rooms (id, name, capacity, room_type)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                capacity = excluded.capacity,
                room_type = excluded.room_type
            "#,
        )
        .bind(room.id.to_string())
        .bind(&room.name)
        .bind(i64::from(room.capacity))
        .bind(room.room_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                RepoError::constraint(format!("room name already exists: {}", room.name))
            }
            _ => RepoError::database("save_room", e),
        })?;
        Ok(())
    }

    async fn delete(&self, id: RoomId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_room", e))?;
        Ok(())
    }
}
