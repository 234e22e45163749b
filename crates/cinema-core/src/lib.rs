//! # Cinema Core
//!
//! Synchronous domain core for a movie-theater chain: the
//! Cinema → Theater → Movie → Showtime hierarchy, instance-cap
//! accounting, and the transaction/receipt engine.
//!
//! This crate does no I/O and spawns no tasks. The async service layer
//! (`box-office`) wraps a [`model::Cinema`] in an actor and exposes the
//! operations over channels; everything here is plain owned data and
//! `Result`-returning methods so it can be exercised directly in unit
//! tests.
//!
//! ## Core Components
//!
//! - **[model]**: the aggregates (`Cinema`, `Theater`, `Movie`,
//!   `Showtime`) and the value objects a sale is made of.
//! - **[registry]**: injectable instance-cap counters for the aggregate
//!   roots.
//! - **[transaction]**: builds a sale out of catalog snapshots and
//!   renders the receipt.
//! - **[error]**: the error types everything above returns.

pub mod error;
pub mod model;
pub mod registry;
pub mod transaction;

pub use error::{CatalogError, RegistryError, TransactionError};
pub use model::{
    AgePricing, Cinema, Customer, FoodAndDrink, Movie, MovieCreate, MovieListing, MovieSummary,
    SeatOccupancy, SeatType, Showtime, ShowtimeCreate, Theater, TheaterCreate, Ticket,
};
pub use registry::{InstanceRegistry, MAX_INSTANCES};
pub use transaction::{Transaction, TransactionType, CASH_REMINDER};
