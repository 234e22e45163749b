//! Movies and their showtime catalogs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::showtime::{SeatOccupancy, Showtime};

/// A movie in a theater's catalog, owning its showtimes.
///
/// Showtimes are keyed by ID for O(1) lookup; a parallel index preserves
/// insertion order for listings. Adding a second showtime with an existing
/// ID is rejected rather than shadowed.
#[derive(Debug, Clone)]
pub struct Movie {
    movie_id: u32,
    title: String,
    genre: String,
    sold_out: bool,
    showtimes: HashMap<u32, Showtime>,
    order: Vec<u32>,
}

/// Parameters for adding a movie to a theater.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreate {
    pub movie_id: u32,
    pub title: String,
    pub genre: String,
}

/// Listing-friendly snapshot of a movie (no showtimes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub movie_id: u32,
    pub title: String,
    pub genre: String,
}

impl Movie {
    pub fn new(movie_id: u32, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genre: genre.into(),
            sold_out: false,
            showtimes: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn movie_id(&self) -> u32 {
        self.movie_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Whether every showtime of this movie is out of seats. Stays `false`
    /// while the movie has no showtimes at all.
    pub fn is_sold_out(&self) -> bool {
        self.sold_out
    }

    /// Snapshot for listings and receipts.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            movie_id: self.movie_id,
            title: self.title.clone(),
            genre: self.genre.clone(),
        }
    }

    /// Appends a showtime to the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateShowtimeId`] if the ID is already
    /// in use.
    pub fn add_showtime(&mut self, showtime: Showtime) -> Result<(), CatalogError> {
        let id = showtime.showtime_id();
        if self.showtimes.contains_key(&id) {
            return Err(CatalogError::DuplicateShowtimeId(id));
        }
        self.showtimes.insert(id, showtime);
        self.order.push(id);
        // A fresh slot may clear a previously sold-out movie.
        self.refresh_sold_out();
        Ok(())
    }

    /// Looks up a showtime by ID.
    ///
    /// # Errors
    /// Returns [`CatalogError::ShowtimeNotFound`] carrying the requested
    /// ID when no showtime matches.
    pub fn select_showtime(&self, showtime_id: u32) -> Result<&Showtime, CatalogError> {
        self.showtimes
            .get(&showtime_id)
            .ok_or(CatalogError::ShowtimeNotFound(showtime_id))
    }

    /// Showtimes in insertion order.
    pub fn showtimes(&self) -> impl Iterator<Item = &Showtime> {
        self.order.iter().filter_map(|id| self.showtimes.get(id))
    }

    /// Read-only `(showtime_id, available_seats)` report, in insertion
    /// order.
    pub fn seat_occupancy(&self) -> Vec<SeatOccupancy> {
        self.showtimes()
            .map(|s| SeatOccupancy {
                showtime_id: s.showtime_id(),
                available_seats: s.available_seats(),
            })
            .collect()
    }

    /// Takes one seat on the given showtime for a ticket sale and returns
    /// the remaining count, refreshing the movie's sold-out flag.
    ///
    /// # Errors
    /// Returns [`CatalogError::ShowtimeNotFound`] for an unknown ID and
    /// [`CatalogError::NoSeatsAvailable`] when the slot is exhausted.
    pub fn reserve_seat(&mut self, showtime_id: u32) -> Result<u32, CatalogError> {
        let showtime = self
            .showtimes
            .get_mut(&showtime_id)
            .ok_or(CatalogError::ShowtimeNotFound(showtime_id))?;
        let remaining = showtime.reserve_seat()?;
        self.refresh_sold_out();
        Ok(remaining)
    }

    fn refresh_sold_out(&mut self) {
        self.sold_out =
            !self.showtimes.is_empty() && self.showtimes.values().all(Showtime::is_sold_out);
    }
}

impl From<MovieCreate> for Movie {
    fn from(params: MovieCreate) -> Self {
        Movie::new(params.movie_id, params.title, params.genre)
    }
}
