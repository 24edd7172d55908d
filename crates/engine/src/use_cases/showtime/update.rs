//! Update showtime use case.
//!
//! Merges a patch into an owned booking and re-validates the merged state.
//! A start date that is not part of the patch is never compared with today,
//! so bookings already running can still be extended or moved to another room.

use std::sync::Arc;

use cinemax_domain::{require_not_past, BookingRange, Showtime, ShowtimeId, UserId};

use crate::infrastructure::ports::{ClockPort, EntityRef, ReferenceValidator, ShowtimeRepo};

use super::checks::{ensure_reference, ensure_room_free};
use super::error::ScheduleError;
use super::types::ShowtimePatch;

/// Update showtime use case.
pub struct UpdateShowtime {
    showtimes: Arc<dyn ShowtimeRepo>,
    references: Arc<dyn ReferenceValidator>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateShowtime {
    pub fn new(
        showtimes: Arc<dyn ShowtimeRepo>,
        references: Arc<dyn ReferenceValidator>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            showtimes,
            references,
            clock,
        }
    }

    /// Apply `patch` to the showtime `id` owned by `owner`.
    pub async fn execute(
        &self,
        id: ShowtimeId,
        patch: ShowtimePatch,
        owner: UserId,
    ) -> Result<Showtime, ScheduleError> {
        let existing = self
            .showtimes
            .get_owned(id, owner)
            .await?
            .ok_or(ScheduleError::NotFound)?;

        let updated = self.prepare(existing, patch).await?;
        self.showtimes.commit_update(&updated).await.map_err(|e| {
            let err = ScheduleError::from(e);
            if let ScheduleError::StoreUnavailable(source) = &err {
                tracing::error!(showtime_id = %id, error = %source, "Failed to commit showtime update");
            }
            err
        })?;

        tracing::info!(
            showtime_id = %id,
            room_id = %updated.room_id(),
            owner_id = %owner,
            "Showtime updated"
        );
        Ok(updated)
    }

    /// Merge `patch` into `existing` and check the result, without writing.
    ///
    /// `existing` must already be resolved for the requesting owner.
    pub async fn prepare(
        &self,
        existing: Showtime,
        patch: ShowtimePatch,
    ) -> Result<Showtime, ScheduleError> {
        if let Some(movie_id) = patch.movie_id {
            ensure_reference(self.references.as_ref(), EntityRef::Movie(movie_id)).await?;
        }
        if let Some(room_id) = patch.room_id {
            ensure_reference(self.references.as_ref(), EntityRef::Room(room_id)).await?;
        }

        let current = existing.range();
        let start = match patch.start {
            Some(start) => {
                require_not_past(start, self.clock.now())?;
                start
            }
            None => current.start(),
        };
        let end = patch.end.unwrap_or_else(|| current.end());
        let range = BookingRange::new(start, end)?;

        let movie_id = patch.movie_id.unwrap_or_else(|| existing.movie_id());
        let room_id = patch.room_id.unwrap_or_else(|| existing.room_id());
        ensure_room_free(self.showtimes.as_ref(), room_id, &range, Some(existing.id())).await?;

        Ok(existing.with_changes(movie_id, room_id, range))
    }
}
