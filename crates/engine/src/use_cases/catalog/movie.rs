//! Movie catalog operations.

use std::sync::Arc;

use chrono::Datelike;
use cinemax_domain::{Movie, MovieId, ReferenceKind};

use crate::infrastructure::ports::{ClockPort, EntityRef, MovieRepo, ShowtimeRepo};

use super::CatalogError;

/// Input for registering a movie.
#[derive(Debug, Clone, Default)]
pub struct RegisterMovie {
    pub title: String,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub duration_minutes: i64,
    pub release_year: Option<i32>,
}

pub struct MovieCatalog {
    movies: Arc<dyn MovieRepo>,
    showtimes: Arc<dyn ShowtimeRepo>,
    clock: Arc<dyn ClockPort>,
}

impl MovieCatalog {
    pub fn new(
        movies: Arc<dyn MovieRepo>,
        showtimes: Arc<dyn ShowtimeRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            movies,
            showtimes,
            clock,
        }
    }

    pub async fn register(&self, input: RegisterMovie) -> Result<Movie, CatalogError> {
        let release_year = input
            .release_year
            .ok_or_else(|| CatalogError::InvalidInput("Release year is required".into()))?;
        let current_year = self.clock.now().year();

        let mut movie = Movie::new(
            input.title,
            input.duration_minutes,
            release_year,
            current_year,
        )?;
        if let Some(director) = input.director {
            movie = movie.with_director(director.trim());
        }
        if let Some(genre) = input.genre {
            movie = movie.with_genre(genre.trim());
        }

        self.movies.save(&movie).await?;
        tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie registered");
        Ok(movie)
    }

    pub async fn list(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.list().await?)
    }

    pub async fn get(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.movies
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(ReferenceKind::Movie))
    }

    /// Delete a movie no showtime refers to.
    pub async fn delete(&self, id: MovieId) -> Result<(), CatalogError> {
        self.get(id).await?;
        if self
            .showtimes
            .count_referencing(EntityRef::Movie(id))
            .await?
            > 0
        {
            return Err(CatalogError::InUse(ReferenceKind::Movie));
        }
        self.movies.delete(id).await?;
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}
