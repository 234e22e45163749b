//! Showtimes and their seat inventory.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single screening slot: a time and a bounded pool of available seats.
///
/// The seat count only moves through [`Showtime::reserve_seat`], which
/// keeps the invariant `0 <= available_seats <= initial_seats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showtime {
    showtime_id: u32,
    time: String,
    available_seats: u32,
    initial_seats: u32,
}

/// Parameters for adding a showtime to a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowtimeCreate {
    pub showtime_id: u32,
    pub time: String,
    pub available_seats: u32,
}

/// One row of a seat-occupancy report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatOccupancy {
    pub showtime_id: u32,
    pub available_seats: u32,
}

impl Showtime {
    pub fn new(showtime_id: u32, time: impl Into<String>, available_seats: u32) -> Self {
        Self {
            showtime_id,
            time: time.into(),
            available_seats,
            initial_seats: available_seats,
        }
    }

    pub fn showtime_id(&self) -> u32 {
        self.showtime_id
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn initial_seats(&self) -> u32 {
        self.initial_seats
    }

    /// Whether every seat for this slot has been sold.
    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }

    /// Takes one seat for a ticket sale and returns the remaining count.
    ///
    /// # Errors
    /// Returns [`CatalogError::NoSeatsAvailable`] when the slot is already
    /// sold out; the count never goes negative.
    pub fn reserve_seat(&mut self) -> Result<u32, CatalogError> {
        if self.available_seats == 0 {
            return Err(CatalogError::NoSeatsAvailable(self.showtime_id));
        }
        self.available_seats -= 1;
        Ok(self.available_seats)
    }
}

impl From<ShowtimeCreate> for Showtime {
    fn from(params: ShowtimeCreate) -> Self {
        Showtime::new(params.showtime_id, params.time, params.available_seats)
    }
}
