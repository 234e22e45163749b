//! # Box Office Actor
//!
//! The server half of the box office. It owns the [`Cinema`] exclusively and
//! processes requests sequentially in its own task, so the catalog needs no
//! locking: two concurrent purchases for the last seat are serialized by the
//! channel, and exactly one of them gets the seat.

use std::sync::Arc;

use cinema_core::model::{Cinema, Movie, Showtime, Theater, Ticket};
use cinema_core::{InstanceRegistry, RegistryError, Transaction, TransactionType, CASH_REMINDER};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::client::BoxOfficeClient;
use crate::error::BoxOfficeError;
use crate::message::{BoxOfficeRequest, Receipt, TicketOrder};

/// The actor that owns the cinema catalog and processes box-office requests.
pub struct BoxOfficeActor {
    receiver: mpsc::Receiver<BoxOfficeRequest>,
    cinema: Cinema,
    registry: Arc<InstanceRegistry>,
}

impl BoxOfficeActor {
    /// Creates the actor and its client.
    ///
    /// The registry is shared: the cinema claims its construction slot here,
    /// and every theater added later claims one through the same registry.
    ///
    /// # Errors
    /// Returns [`RegistryError::InstanceLimitExceeded`] if the cinema cap is
    /// already reached.
    pub fn new(
        buffer_size: usize,
        registry: Arc<InstanceRegistry>,
    ) -> Result<(Self, BoxOfficeClient), RegistryError> {
        let cinema = Cinema::new(&registry)?;
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            cinema,
            registry,
        };
        Ok((actor, BoxOfficeClient::new(sender)))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Box office started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(theaters = self.cinema.total_theaters(), "Box office shutdown");
    }

    fn handle(&mut self, msg: BoxOfficeRequest) {
        match msg {
            BoxOfficeRequest::AddTheater { params, respond_to } => {
                debug!(theater_id = params.theater_id, "AddTheater");
                let theater = Theater::new(params.theater_id, params.address, &self.registry);
                let result = self.cinema.add_theater(theater).map_err(Into::into);
                if let Err(e) = &result {
                    warn!(error = %e, "AddTheater failed");
                }
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::AddMovie {
                theater_id,
                params,
                respond_to,
            } => {
                debug!(theater_id, movie_id = params.movie_id, "AddMovie");
                let result = self
                    .cinema
                    .select_theater_mut(theater_id)
                    .and_then(|theater| theater.add_movie(Movie::from(params)))
                    .map_err(Into::into);
                if let Err(e) = &result {
                    warn!(error = %e, "AddMovie failed");
                }
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::AddShowtime {
                theater_id,
                movie_id,
                params,
                respond_to,
            } => {
                debug!(theater_id, movie_id, showtime_id = params.showtime_id, "AddShowtime");
                let result = self
                    .cinema
                    .select_theater_mut(theater_id)
                    .and_then(|theater| theater.select_movie_mut(movie_id))
                    .and_then(|movie| movie.add_showtime(Showtime::from(params)))
                    .map_err(Into::into);
                if let Err(e) = &result {
                    warn!(error = %e, "AddShowtime failed");
                }
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::AddMenuItem {
                theater_id,
                item,
                respond_to,
            } => {
                debug!(theater_id, name = %item.name, "AddMenuItem");
                let result = self
                    .cinema
                    .select_theater_mut(theater_id)
                    .and_then(|theater| theater.add_menu_item(item))
                    .map_err(Into::into);
                if let Err(e) = &result {
                    warn!(error = %e, "AddMenuItem failed");
                }
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::GetTheater {
                theater_id,
                respond_to,
            } => {
                debug!(theater_id, "GetTheater");
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(Theater::clone)
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::TotalTheaters { respond_to } => {
                let _ = respond_to.send(Ok(self.cinema.total_theaters()));
            }
            BoxOfficeRequest::IsValidTheater {
                theater_id,
                respond_to,
            } => {
                let _ = respond_to.send(Ok(self.cinema.is_valid_theater(theater_id)));
            }
            BoxOfficeRequest::IsValidMovie {
                theater_id,
                movie_id,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(|theater| theater.is_valid_movie(movie_id))
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::IsMovieShowing {
                theater_id,
                genre,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(|theater| theater.is_movie_showing(&genre))
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::AvailableGenres {
                theater_id,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(|theater| theater.available_genres().into_iter().collect())
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::ListMovies {
                theater_id,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(Theater::movie_listing)
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::MoviesByGenre {
                theater_id,
                genre,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(|theater| theater.movies_by_genre(&genre))
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::ListShowtimes {
                theater_id,
                movie_id,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .and_then(|theater| theater.select_movie(movie_id))
                    .map(|movie| movie.showtimes().cloned().collect())
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::SeatOccupancy {
                theater_id,
                movie_id,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .and_then(|theater| theater.select_movie(movie_id))
                    .map(Movie::seat_occupancy)
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::ListMenu {
                theater_id,
                respond_to,
            } => {
                let result = self
                    .cinema
                    .select_theater(theater_id)
                    .map(|theater| theater.menu().to_vec())
                    .map_err(Into::into);
                let _ = respond_to.send(result);
            }
            BoxOfficeRequest::Purchase { order, respond_to } => {
                debug!(
                    theater_id = order.theater_id,
                    movie_id = order.movie_id,
                    showtime_id = order.showtime_id,
                    seat = %order.seat_number,
                    "Purchase"
                );
                let result = self.handle_purchase(order);
                match &result {
                    Ok(receipt) => info!(
                        total = receipt.total,
                        remaining_seats = receipt.remaining_seats,
                        "Purchase ok"
                    ),
                    Err(e) => warn!(error = %e, "Purchase failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }

    /// Resolves the order against the catalog, reserves the seat, and builds
    /// the transaction.
    ///
    /// Menu names are resolved before the seat is taken, so a misspelled
    /// concession never costs the customer their seat.
    fn handle_purchase(&mut self, order: TicketOrder) -> Result<Receipt, BoxOfficeError> {
        let theater = self.cinema.select_theater_mut(order.theater_id)?;

        let mut items = Vec::with_capacity(order.menu_selections.len());
        for name in &order.menu_selections {
            items.push(theater.menu_item(name)?.clone());
        }

        let (movie, showtime, remaining_seats) = {
            let movie = theater.select_movie_mut(order.movie_id)?;
            let remaining = movie.reserve_seat(order.showtime_id)?;
            let showtime = movie.select_showtime(order.showtime_id)?.clone();
            (movie.summary(), showtime, remaining)
        };

        let ticket = Ticket::new(order.seat_number, order.seat_type, order.age_pricing);
        theater.record_sale(ticket.clone());

        let mut transaction = Transaction::new();
        transaction.process_transaction(order.customer, movie, showtime, ticket, items);
        transaction.select_transaction_type(order.transaction_type);
        if transaction.transaction_type() == Some(&TransactionType::Cash) {
            info!("{CASH_REMINDER}");
        }

        Ok(Receipt {
            total: transaction.total_cost()?,
            text: transaction.render_receipt()?,
            remaining_seats,
        })
    }
}
