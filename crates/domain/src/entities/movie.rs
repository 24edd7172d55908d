//! Movie entity - catalog entry a showtime screens

use crate::{DomainError, MovieId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    pub genre: String,
    /// Running time in minutes
    pub duration_minutes: u32,
    pub release_year: i32,
}

impl Movie {
    /// Create a movie, checking its fields against `current_year`.
    pub fn new(
        title: impl Into<String>,
        duration_minutes: i64,
        release_year: i32,
        current_year: i32,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(DomainError::validation("Title is required"));
        }
        let duration_minutes = u32::try_from(duration_minutes)
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| DomainError::validation("Duration must be a positive number"))?;
        if release_year > current_year {
            return Err(DomainError::validation(
                "Release year cannot be in the future",
            ));
        }

        Ok(Self {
            id: MovieId::new(),
            title,
            director: String::new(),
            genre: String::new(),
            duration_minutes,
            release_year,
        })
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_valid_movie() {
        let movie = Movie::new("  Interstellar ", 169, 2014, 2025)
            .unwrap()
            .with_director("Christopher Nolan")
            .with_genre("Sci-Fi");
        assert_eq!(movie.title, "Interstellar");
        assert_eq!(movie.duration_minutes, 169);
        assert_eq!(movie.director, "Christopher Nolan");
    }

    #[test]
    fn rejects_blank_title() {
        let err = Movie::new("   ", 100, 2020, 2025).unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn rejects_non_positive_duration() {
        for duration in [0, -10] {
            let err = Movie::new("Movie", duration, 2020, 2025).unwrap_err();
            assert_eq!(err.to_string(), "Duration must be a positive number");
        }
    }

    #[test]
    fn rejects_future_release_year() {
        let err = Movie::new("Future Movie", 120, 2026, 2025).unwrap_err();
        assert_eq!(err.to_string(), "Release year cannot be in the future");
    }

    #[test]
    fn current_year_release_is_allowed() {
        assert!(Movie::new("Fresh", 90, 2025, 2025).is_ok());
    }
}
