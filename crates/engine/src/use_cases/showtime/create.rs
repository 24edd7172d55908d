//! Create showtime use case.
//!
//! Validates a candidate booking against the catalog, the clock and the
//! room's existing bookings, then commits it through the record store.

use std::sync::Arc;

use cinemax_domain::{require_not_past, BookingRange, Showtime, ShowtimeDraft, UserId};

use crate::infrastructure::ports::{ClockPort, EntityRef, ReferenceValidator, ShowtimeRepo};

use super::checks::{ensure_reference, ensure_room_free};
use super::error::ScheduleError;
use super::types::ShowtimeCandidate;

/// Create showtime use case.
pub struct CreateShowtime {
    showtimes: Arc<dyn ShowtimeRepo>,
    references: Arc<dyn ReferenceValidator>,
    clock: Arc<dyn ClockPort>,
}

impl CreateShowtime {
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

    /// Validate `candidate` and commit it for `owner`.
    ///
    /// # Returns
    /// * `Ok(Showtime)` - The persisted booking with its new id
    /// * `Err(ScheduleError)` - Nothing was written
    pub async fn execute(
        &self,
        candidate: ShowtimeCandidate,
        owner: UserId,
    ) -> Result<Showtime, ScheduleError> {
        let draft = self.prepare(candidate, owner).await?;
        let showtime = self
            .showtimes
            .commit_create(&draft)
            .await
            .map_err(|e| {
                let err = ScheduleError::from(e);
                if let ScheduleError::StoreUnavailable(source) = &err {
                    tracing::error!(error = %source, "Failed to commit showtime");
                }
                err
            })?;

        tracing::info!(
            showtime_id = %showtime.id(),
            room_id = %showtime.room_id(),
            owner_id = %owner,
            days = showtime.range().days(),
            "Showtime created"
        );
        Ok(showtime)
    }

    /// Run every check a new booking must pass, without writing anything.
    pub async fn prepare(
        &self,
        candidate: ShowtimeCandidate,
        owner: UserId,
    ) -> Result<ShowtimeDraft, ScheduleError> {
        ensure_reference(self.references.as_ref(), EntityRef::Movie(candidate.movie_id)).await?;
        ensure_reference(self.references.as_ref(), EntityRef::Room(candidate.room_id)).await?;

        require_not_past(candidate.start, self.clock.now())?;
        let range = BookingRange::new(candidate.start, candidate.end)?;

        ensure_room_free(self.showtimes.as_ref(), candidate.room_id, &range, None).await?;

        Ok(ShowtimeDraft::new(
            candidate.movie_id,
            candidate.room_id,
            owner,
            range,
        ))
    }
}
