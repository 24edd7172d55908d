//! Checks shared by create and update.

use cinemax_domain::{BookingRange, RoomId, ShowtimeId};

use crate::infrastructure::ports::{EntityRef, ReferenceValidator, ShowtimeRepo};

use super::error::ScheduleError;

pub(super) async fn ensure_reference(
    references: &dyn ReferenceValidator,
    reference: EntityRef,
) -> Result<(), ScheduleError> {
    if references.exists(reference).await? {
        return Ok(());
    }
    tracing::debug!(kind = %reference.kind(), id = %reference.id_string(), "Unknown reference");
    Err(ScheduleError::ReferenceNotFound(reference.kind()))
}

/// Reject `range` if it shares a day with any other booking in `room_id`.
pub(super) async fn ensure_room_free(
    showtimes: &dyn ShowtimeRepo,
    room_id: RoomId,
    range: &BookingRange,
    exclude: Option<ShowtimeId>,
) -> Result<(), ScheduleError> {
    let booked = showtimes.find_in_room(room_id, exclude).await?;
    if let Some(clash) = booked.iter().find(|b| range.overlaps(&b.range)) {
        tracing::warn!(
            room_id = %room_id,
            conflicting_showtime = %clash.id,
            start = %range.start(),
            end = %range.end(),
            "Rejected overlapping showtime"
        );
        return Err(ScheduleError::OverlapConflict);
    }
    Ok(())
}
