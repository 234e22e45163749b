//! # Core Errors
//!
//! This module defines the error types used throughout the booking core.
//! By centralizing error definitions, we ensure consistent error handling
//! across the catalog, the instance registry, and the transaction engine.
//!
//! Every failure is a value returned at the point of detection and
//! propagates unchanged to the caller; nothing here is fatal to the
//! process.

use thiserror::Error;

/// Errors raised by ID-based catalog lookups and mutations.
///
/// The `*NotFound` variants carry the requested ID and are always
/// recoverable by the caller (catch-and-retry or catch-and-report).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No theater with the given ID exists in the cinema.
    #[error("Theater not found with ID: {0}")]
    TheaterNotFound(u32),

    /// No movie with the given ID exists in the theater.
    #[error("Movie not found with ID: {0}")]
    MovieNotFound(u32),

    /// No showtime with the given ID exists for the movie.
    #[error("Showtime not found with ID: {0}")]
    ShowtimeNotFound(u32),

    /// No menu item with the given name exists in the theater.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// A menu item was added with a negative price. Carries the item name.
    #[error("Menu item price cannot be negative: {0}")]
    NegativeMenuItemPrice(String),

    /// A theater with this ID was already added.
    #[error("Theater ID already in use: {0}")]
    DuplicateTheaterId(u32),

    /// A movie with this ID was already added to the theater.
    #[error("Movie ID already in use: {0}")]
    DuplicateMovieId(u32),

    /// A showtime with this ID was already added to the movie.
    #[error("Showtime ID already in use: {0}")]
    DuplicateShowtimeId(u32),

    /// The showtime has no seats left; a sale would drive the count
    /// negative.
    #[error("No seats available for showtime {0}")]
    NoSeatsAvailable(u32),
}

/// Errors raised by the instance registry when an aggregate cap is hit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The fixed process-wide cap on aggregate-root instances was reached.
    /// Fatal to that construction attempt only.
    #[error("Maximum number of {kind} instances ({cap}) reached.")]
    InstanceLimitExceeded { kind: &'static str, cap: u32 },
}

/// Errors raised by the transaction/receipt engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// A total or receipt was requested before every required reference
    /// (customer, movie, showtime, ticket) was populated. Carries the name
    /// of the first missing field.
    #[error("Transaction is missing required data: {0}")]
    MissingTransactionData(&'static str),
}
