//! Domain model for the booking hierarchy.
//!
//! Ownership mirrors the real-world containment: a [`Cinema`] owns its
//! [`Theater`]s, each theater its [`Movie`]s, each movie its
//! [`Showtime`]s. Alongside the aggregates live the value objects a sale
//! is made of: [`Ticket`], [`FoodAndDrink`], and [`Customer`].

pub mod cinema;
pub mod customer;
pub mod food;
pub mod movie;
pub mod showtime;
pub mod theater;
pub mod ticket;

pub use cinema::Cinema;
pub use customer::Customer;
pub use food::FoodAndDrink;
pub use movie::{Movie, MovieCreate, MovieSummary};
pub use showtime::{SeatOccupancy, Showtime, ShowtimeCreate};
pub use theater::{MovieListing, Theater, TheaterCreate};
pub use ticket::{AgePricing, SeatType, Ticket};
