//! Showtime use cases.
//!
//! Scheduling a showtime means booking one room for a run of whole days.
//! Create and update share the same checks, in this order: references exist,
//! the start is not in the past, the end is not before the start, and the
//! room has no other booking on any of those days.

mod checks;
mod create;
mod crud;
mod error;
mod types;
mod update;

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, ReferenceValidator, ShowtimeRepo};

pub use create::CreateShowtime;
pub use crud::ShowtimeOps;
pub use error::ScheduleError;
pub use types::{ShowtimeCandidate, ShowtimePatch};
pub use update::UpdateShowtime;

/// Container for showtime use cases.
pub struct ShowtimeUseCases {
    pub create: Arc<CreateShowtime>,
    pub update: Arc<UpdateShowtime>,
    pub ops: Arc<ShowtimeOps>,
}

impl ShowtimeUseCases {
    pub fn new(
        create: Arc<CreateShowtime>,
        update: Arc<UpdateShowtime>,
        ops: Arc<ShowtimeOps>,
    ) -> Self {
        Self {
            create,
            update,
            ops,
        }
    }

    /// Wire every showtime use case against the same ports.
    pub fn from_ports(
        showtimes: Arc<dyn ShowtimeRepo>,
        references: Arc<dyn ReferenceValidator>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::new(
            Arc::new(CreateShowtime::new(
                showtimes.clone(),
                references.clone(),
                clock.clone(),
            )),
            Arc::new(UpdateShowtime::new(showtimes.clone(), references, clock)),
            Arc::new(ShowtimeOps::new(showtimes)),
        )
    }
}
