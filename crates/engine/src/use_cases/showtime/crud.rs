//! Owner-scoped showtime reads and deletes.

use std::sync::Arc;

use cinemax_domain::{ShowtimeId, UserId};

use crate::infrastructure::ports::{ShowtimeListing, ShowtimeRepo};

use super::error::ScheduleError;

/// Showtime operations that need no scheduling checks.
pub struct ShowtimeOps {
    showtimes: Arc<dyn ShowtimeRepo>,
}

impl ShowtimeOps {
    pub fn new(showtimes: Arc<dyn ShowtimeRepo>) -> Self {
        Self { showtimes }
    }

    pub async fn list(&self, owner: UserId) -> Result<Vec<ShowtimeListing>, ScheduleError> {
        Ok(self.showtimes.list_by_owner(owner).await?)
    }

    pub async fn get(
        &self,
        id: ShowtimeId,
        owner: UserId,
    ) -> Result<ShowtimeListing, ScheduleError> {
        self.showtimes
            .get_listing(id, owner)
            .await?
            .ok_or(ScheduleError::NotFound)
    }

    /// Delete a booking. Only its owner may do so.
    pub async fn delete(&self, id: ShowtimeId, owner: UserId) -> Result<(), ScheduleError> {
        if !self.showtimes.delete_owned(id, owner).await? {
            return Err(ScheduleError::NotFound);
        }
        tracing::info!(showtime_id = %id, owner_id = %owner, "Showtime deleted");
        Ok(())
    }
}
