//! # Box Office Messages
//!
//! The request enum sent from [`BoxOfficeClient`](crate::client::BoxOfficeClient)
//! to [`BoxOfficeActor`](crate::actor::BoxOfficeActor). Every variant carries a
//! oneshot sender so the actor can reply directly to the caller; requests and
//! responses never share state.

use cinema_core::model::{
    AgePricing, Customer, FoodAndDrink, MovieCreate, MovieListing, MovieSummary, SeatOccupancy,
    SeatType, Showtime, ShowtimeCreate, Theater, TheaterCreate,
};
use cinema_core::TransactionType;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::error::BoxOfficeError;

/// Reply channel paired with each request.
pub type Responder<T> = oneshot::Sender<Result<T, BoxOfficeError>>;

/// One ticket sale, as the caller describes it. The actor resolves the IDs
/// and menu names against the catalog when it processes the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketOrder {
    pub theater_id: u32,
    pub movie_id: u32,
    pub showtime_id: u32,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub age_pricing: AgePricing,
    pub customer: Customer,
    /// Menu item names, resolved against the theater's menu.
    pub menu_selections: Vec<String>,
    pub transaction_type: TransactionType,
}

/// What a completed purchase hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// The rendered plain-text receipt.
    pub text: String,
    /// Ticket plus concessions, rounded to cents.
    pub total: f64,
    /// Seats left on the showtime after this sale.
    pub remaining_seats: u32,
}

/// The full request surface of the box office.
#[derive(Debug)]
pub enum BoxOfficeRequest {
    AddTheater {
        params: TheaterCreate,
        respond_to: Responder<()>,
    },
    AddMovie {
        theater_id: u32,
        params: MovieCreate,
        respond_to: Responder<()>,
    },
    AddShowtime {
        theater_id: u32,
        movie_id: u32,
        params: ShowtimeCreate,
        respond_to: Responder<()>,
    },
    AddMenuItem {
        theater_id: u32,
        item: FoodAndDrink,
        respond_to: Responder<()>,
    },
    GetTheater {
        theater_id: u32,
        respond_to: Responder<Theater>,
    },
    TotalTheaters {
        respond_to: Responder<usize>,
    },
    IsValidTheater {
        theater_id: u32,
        respond_to: Responder<bool>,
    },
    IsValidMovie {
        theater_id: u32,
        movie_id: u32,
        respond_to: Responder<bool>,
    },
    IsMovieShowing {
        theater_id: u32,
        genre: String,
        respond_to: Responder<bool>,
    },
    AvailableGenres {
        theater_id: u32,
        respond_to: Responder<Vec<String>>,
    },
    ListMovies {
        theater_id: u32,
        respond_to: Responder<MovieListing>,
    },
    MoviesByGenre {
        theater_id: u32,
        genre: String,
        respond_to: Responder<Vec<MovieSummary>>,
    },
    ListShowtimes {
        theater_id: u32,
        movie_id: u32,
        respond_to: Responder<Vec<Showtime>>,
    },
    SeatOccupancy {
        theater_id: u32,
        movie_id: u32,
        respond_to: Responder<Vec<SeatOccupancy>>,
    },
    ListMenu {
        theater_id: u32,
        respond_to: Responder<Vec<FoodAndDrink>>,
    },
    Purchase {
        order: TicketOrder,
        respond_to: Responder<Receipt>,
    },
}
