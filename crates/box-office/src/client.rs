//! # Box Office Client
//!
//! Type-safe handle for talking to the [`BoxOfficeActor`](crate::actor::BoxOfficeActor).
//! It hides the channel plumbing behind domain methods; it holds only a
//! sender, so it is cheap to clone and share across tasks.

use cinema_core::model::{
    FoodAndDrink, MovieCreate, MovieListing, MovieSummary, SeatOccupancy, Showtime,
    ShowtimeCreate, Theater, TheaterCreate,
};
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

use crate::error::BoxOfficeError;
use crate::message::{BoxOfficeRequest, Receipt, Responder, TicketOrder};

/// Client for interacting with the box office actor.
#[derive(Clone, Debug)]
pub struct BoxOfficeClient {
    sender: mpsc::Sender<BoxOfficeRequest>,
}

impl BoxOfficeClient {
    pub fn new(sender: mpsc::Sender<BoxOfficeRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Responder<T>) -> BoxOfficeRequest,
    ) -> Result<T, BoxOfficeError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| BoxOfficeError::Closed)?;
        response.await.map_err(|_| BoxOfficeError::Dropped)?
    }

    #[instrument(skip(self))]
    pub async fn add_theater(&self, params: TheaterCreate) -> Result<(), BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::AddTheater { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_movie(
        &self,
        theater_id: u32,
        params: MovieCreate,
    ) -> Result<(), BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::AddMovie {
            theater_id,
            params,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn add_showtime(
        &self,
        theater_id: u32,
        movie_id: u32,
        params: ShowtimeCreate,
    ) -> Result<(), BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::AddShowtime {
            theater_id,
            movie_id,
            params,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn add_menu_item(
        &self,
        theater_id: u32,
        item: FoodAndDrink,
    ) -> Result<(), BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::AddMenuItem {
            theater_id,
            item,
            respond_to,
        })
        .await
    }

    /// Fetches a snapshot of a theater, its catalog included.
    #[instrument(skip(self))]
    pub async fn get_theater(&self, theater_id: u32) -> Result<Theater, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::GetTheater {
            theater_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn total_theaters(&self) -> Result<usize, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::TotalTheaters { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn is_valid_theater(&self, theater_id: u32) -> Result<bool, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::IsValidTheater {
            theater_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn is_valid_movie(
        &self,
        theater_id: u32,
        movie_id: u32,
    ) -> Result<bool, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::IsValidMovie {
            theater_id,
            movie_id,
            respond_to,
        })
        .await
    }

    /// Whether any movie of the genre is showing at the theater.
    #[instrument(skip(self))]
    pub async fn is_movie_showing(
        &self,
        theater_id: u32,
        genre: impl Into<String> + std::fmt::Debug,
    ) -> Result<bool, BoxOfficeError> {
        let genre = genre.into();
        self.request(|respond_to| BoxOfficeRequest::IsMovieShowing {
            theater_id,
            genre,
            respond_to,
        })
        .await
    }

    /// Distinct genres at the theater, sorted.
    #[instrument(skip(self))]
    pub async fn available_genres(&self, theater_id: u32) -> Result<Vec<String>, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::AvailableGenres {
            theater_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_movies(&self, theater_id: u32) -> Result<MovieListing, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::ListMovies {
            theater_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn movies_by_genre(
        &self,
        theater_id: u32,
        genre: impl Into<String> + std::fmt::Debug,
    ) -> Result<Vec<MovieSummary>, BoxOfficeError> {
        let genre = genre.into();
        self.request(|respond_to| BoxOfficeRequest::MoviesByGenre {
            theater_id,
            genre,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_showtimes(
        &self,
        theater_id: u32,
        movie_id: u32,
    ) -> Result<Vec<Showtime>, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::ListShowtimes {
            theater_id,
            movie_id,
            respond_to,
        })
        .await
    }

    /// Seats remaining per showtime of a movie.
    #[instrument(skip(self))]
    pub async fn seat_occupancy(
        &self,
        theater_id: u32,
        movie_id: u32,
    ) -> Result<Vec<SeatOccupancy>, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::SeatOccupancy {
            theater_id,
            movie_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_menu(&self, theater_id: u32) -> Result<Vec<FoodAndDrink>, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::ListMenu {
            theater_id,
            respond_to,
        })
        .await
    }

    /// Buys one ticket: reserves the seat, records the sale, and returns the
    /// rendered receipt.
    #[instrument(skip(self, order), fields(
        theater_id = order.theater_id,
        movie_id = order.movie_id,
        showtime_id = order.showtime_id,
    ))]
    pub async fn purchase(&self, order: TicketOrder) -> Result<Receipt, BoxOfficeError> {
        self.request(|respond_to| BoxOfficeRequest::Purchase { order, respond_to })
            .await
    }
}
