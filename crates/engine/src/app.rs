//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, MovieRepo, ReferenceValidator, RoomRepo, ShowtimeRepo},
    sqlite::SqliteRepositories,
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub showtime: Arc<dyn ShowtimeRepo>,
    pub movie: Arc<dyn MovieRepo>,
    pub room: Arc<dyn RoomRepo>,
    pub references: Arc<dyn ReferenceValidator>,
}

/// Container for all use cases.
pub struct UseCases {
    pub showtime: use_cases::ShowtimeUseCases,
    pub catalog: use_cases::CatalogUseCases,
}

impl App {
    /// Create a new App running on the system clock.
    pub fn new(repos: SqliteRepositories) -> Self {
        Self::with_clock(repos, Arc::new(SystemClock::new()))
    }

    /// Create a new App with an explicit notion of "now".
    pub fn with_clock(repos: SqliteRepositories, clock: Arc<dyn ClockPort>) -> Self {
        let repositories = Repositories {
            showtime: repos.showtimes.clone(),
            movie: repos.catalog.clone(),
            room: repos.catalog.clone(),
            references: repos.catalog,
        };

        let showtime = use_cases::ShowtimeUseCases::from_ports(
            repositories.showtime.clone(),
            repositories.references.clone(),
            clock.clone(),
        );
        let catalog = use_cases::CatalogUseCases::new(
            Arc::new(use_cases::catalog::MovieCatalog::new(
                repositories.movie.clone(),
                repositories.showtime.clone(),
                clock,
            )),
            Arc::new(use_cases::catalog::RoomCatalog::new(
                repositories.room.clone(),
                repositories.showtime.clone(),
            )),
        );

        Self {
            repositories,
            use_cases: UseCases { showtime, catalog },
        }
    }
}
