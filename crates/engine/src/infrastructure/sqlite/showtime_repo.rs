//! SQLite showtime record store.

use async_trait::async_trait;
use cinemax_domain::{
    BookingRange, MovieId, RoomId, Showtime, ShowtimeDraft, ShowtimeId, UserId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tokio::sync::Mutex;

use super::{column, decode_datetime, decode_uuid, encode_datetime};
use crate::infrastructure::ports::{
    BookedRange, EntityRef, RepoError, ShowtimeListing, ShowtimeRepo,
};

const SELECT_COLUMNS: &str = "SELECT id, movie_id, room_id, owner_id, start_time, end_time FROM showtimes";

// Catalog entries may have been deleted, hence the outer joins.
const SELECT_LISTING: &str = r#"
    SELECT s.id, s.movie_id, s.room_id, s.owner_id, s.start_time, s.end_time,
           m.title AS movie_title, r.name AS room_name
    FROM showtimes s
    LEFT JOIN movies m ON m.id = s.movie_id
    LEFT JOIN rooms r ON r.id = s.room_id
"#;

/// SQLite implementation of the showtime record store.
///
/// Commits hold `write_guard` for the whole transaction and re-run the room
/// overlap query inside it, so of two racing conflicting writes exactly one
/// is stored.
pub struct SqliteShowtimeRepo {
    pool: SqlitePool,
    write_guard: Mutex<()>,
}

impl SqliteShowtimeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_guard: Mutex::new(()),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Fail with `RepoError::Conflict` if `range` collides with another
    /// booking in `room_id`, reading through the open transaction.
    async fn ensure_room_free(
        tx: &mut Transaction<'_, Sqlite>,
        room_id: RoomId,
        range: BookingRange,
        exclude: Option<ShowtimeId>,
    ) -> Result<(), RepoError> {
        let rows = sqlx::query(
            "SELECT id, start_time, end_time FROM showtimes WHERE room_id = ? AND id != ?",
        )
        .bind(room_id.to_string())
        .bind(exclude.map(|id| id.to_string()).unwrap_or_default())
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| RepoError::database("ensure_room_free", e))?;

        for row in &rows {
            let booked = booked_range_from_row(row)?;
            if range.overlaps(&booked.range) {
                return Err(RepoError::conflict(format!(
                    "room {room_id} already booked by showtime {}",
                    booked.id
                )));
            }
        }
        Ok(())
    }
}

fn booked_range_from_row(row: &SqliteRow) -> Result<BookedRange, RepoError> {
    let id: String = column(row, "id")?;
    let start: String = column(row, "start_time")?;
    let end: String = column(row, "end_time")?;

    let range = BookingRange::new(
        decode_datetime("start_time", &start)?,
        decode_datetime("end_time", &end)?,
    )
    .map_err(|e| RepoError::serialization(format!("showtime {id}: {e}")))?;

    Ok(BookedRange {
        id: ShowtimeId::from_uuid(decode_uuid("id", &id)?),
        range,
    })
}

fn showtime_from_row(row: &SqliteRow) -> Result<Showtime, RepoError> {
    let booked = booked_range_from_row(row)?;
    let movie_id: String = column(row, "movie_id")?;
    let room_id: String = column(row, "room_id")?;
    let owner_id: String = column(row, "owner_id")?;

    Ok(Showtime::from_parts(
        booked.id,
        MovieId::from_uuid(decode_uuid("movie_id", &movie_id)?),
        RoomId::from_uuid(decode_uuid("room_id", &room_id)?),
        UserId::from_uuid(decode_uuid("owner_id", &owner_id)?),
        booked.range,
    ))
}

fn listing_from_row(row: &SqliteRow) -> Result<ShowtimeListing, RepoError> {
    Ok(ShowtimeListing {
        showtime: showtime_from_row(row)?,
        movie_title: column(row, "movie_title")?,
        room_name: column(row, "room_name")?,
    })
}

#[async_trait]
impl ShowtimeRepo for SqliteShowtimeRepo {
    async fn get_owned(
        &self,
        id: ShowtimeId,
        owner: UserId,
    ) -> Result<Option<Showtime>, RepoError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ? AND owner_id = ?"))
            .bind(id.to_string())
            .bind(owner.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_owned", e))?;

        row.as_ref().map(showtime_from_row).transpose()
    }

    async fn get_listing(
        &self,
        id: ShowtimeId,
        owner: UserId,
    ) -> Result<Option<ShowtimeListing>, RepoError> {
        let row = sqlx::query(&format!(
            "{SELECT_LISTING} WHERE s.id = ? AND s.owner_id = ?"
        ))
        .bind(id.to_string())
        .bind(owner.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("get_listing", e))?;

        row.as_ref().map(listing_from_row).transpose()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<ShowtimeListing>, RepoError> {
        let rows = sqlx::query(&format!(
            "{SELECT_LISTING} WHERE s.owner_id = ? ORDER BY s.start_time, s.id"
        ))
        .bind(owner.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_by_owner", e))?;

        rows.iter().map(listing_from_row).collect()
    }

    async fn find_in_room(
        &self,
        room_id: RoomId,
        exclude: Option<ShowtimeId>,
    ) -> Result<Vec<BookedRange>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, start_time, end_time FROM showtimes WHERE room_id = ? AND id != ? ORDER BY start_time",
        )
        .bind(room_id.to_string())
        .bind(exclude.map(|id| id.to_string()).unwrap_or_default())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("find_in_room", e))?;

        rows.iter().map(booked_range_from_row).collect()
    }

    async fn commit_create(&self, draft: &ShowtimeDraft) -> Result<Showtime, RepoError> {
        let _guard = self.write_guard.lock().await;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("commit_create", e))?;

        Self::ensure_room_free(&mut tx, draft.room_id, draft.range, None).await?;

        let showtime = draft.clone().into_showtime(ShowtimeId::new());
        sqlx::query(
            r#"
            INSERT INTO showtimes (id, movie_id, room_id, owner_id, start_time, end_time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(showtime.id().to_string())
        .bind(showtime.movie_id().to_string())
        .bind(showtime.room_id().to_string())
        .bind(showtime.owner_id().to_string())
        .bind(encode_datetime(showtime.range().start()))
        .bind(encode_datetime(showtime.range().end()))
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("commit_create", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("commit_create", e))?;
        Ok(showtime)
    }

    async fn commit_update(&self, showtime: &Showtime) -> Result<(), RepoError> {
        let _guard = self.write_guard.lock().await;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("commit_update", e))?;

        Self::ensure_room_free(&mut tx, showtime.room_id(), showtime.range(), Some(showtime.id()))
            .await?;

        let result = sqlx::query(
            r#"
            UPDATE showtimes
            SET movie_id = ?, room_id = ?, start_time = ?, end_time = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(showtime.movie_id().to_string())
        .bind(showtime.room_id().to_string())
        .bind(encode_datetime(showtime.range().start()))
        .bind(encode_datetime(showtime.range().end()))
        .bind(showtime.id().to_string())
        .bind(showtime.owner_id().to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("commit_update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Showtime", showtime.id()));
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("commit_update", e))?;
        Ok(())
    }

    async fn delete_owned(&self, id: ShowtimeId, owner: UserId) -> Result<bool, RepoError> {
        let _guard = self.write_guard.lock().await;
        let result = sqlx::query("DELETE FROM showtimes WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_owned", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_referencing(&self, reference: EntityRef) -> Result<u64, RepoError> {
        let column = match reference {
            EntityRef::Movie(_) => "movie_id",
            EntityRef::Room(_) => "room_id",
        };
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM showtimes WHERE {column} = ?"
        ))
        .bind(reference.id_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("count_referencing", e))?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
