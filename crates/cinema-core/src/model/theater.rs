//! Theaters: movie catalogs, menus, and the ticket sale ledger.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CatalogError;
use crate::registry::{InstanceRegistry, MAX_INSTANCES};

use super::food::FoodAndDrink;
use super::movie::{Movie, MovieSummary};
use super::ticket::Ticket;

/// A theater inside the cinema chain.
///
/// Owns its movies exclusively (keyed by `movie_id` with an insertion-order
/// index), a food-and-drink menu, and the ledger of tickets sold.
///
/// # Cap policy
/// Theater uses the *degraded* instance-cap policy: once
/// [`MAX_INSTANCES`] theaters have been constructed through a registry,
/// further constructions log a warning and yield a blank, zero-valued
/// theater instead of failing. Cinema, by contrast, fails strictly; the
/// two entity types carry different policies on purpose.
///
/// Every blank theater carries ID 0, so a cinema accepts at most one of
/// them: a second past-cap add collides with
/// [`CatalogError::DuplicateTheaterId`]. The degradation stays silent
/// only once per cinema.
#[derive(Debug, Clone)]
pub struct Theater {
    theater_id: u32,
    address: String,
    movies: HashMap<u32, Movie>,
    order: Vec<u32>,
    tickets: Vec<Ticket>,
    menu: Vec<FoodAndDrink>,
}

/// Parameters for adding a theater to the cinema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheaterCreate {
    pub theater_id: u32,
    pub address: String,
}

/// The result of listing a theater's movies: an explicit empty state
/// rather than a bare empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovieListing {
    /// No movies currently available in this theater.
    Empty,
    /// Movies in insertion order.
    Showing(Vec<MovieSummary>),
}

impl Theater {
    /// Constructs a theater, claiming a slot from the registry.
    ///
    /// Past the cap this degrades to a blank theater (ID 0, empty address,
    /// empty collections) without advancing the counter.
    pub fn new(theater_id: u32, address: impl Into<String>, registry: &InstanceRegistry) -> Self {
        if !registry.try_acquire_theater() {
            warn!(cap = MAX_INSTANCES, "Cannot create more theaters; producing a blank instance");
            return Self::blank();
        }
        Self {
            theater_id,
            address: address.into(),
            movies: HashMap::new(),
            order: Vec::new(),
            tickets: Vec::new(),
            menu: Vec::new(),
        }
    }

    fn blank() -> Self {
        Self {
            theater_id: 0,
            address: String::new(),
            movies: HashMap::new(),
            order: Vec::new(),
            tickets: Vec::new(),
            menu: Vec::new(),
        }
    }

    pub fn theater_id(&self) -> u32 {
        self.theater_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Appends a movie to the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateMovieId`] if the ID is already in
    /// use.
    pub fn add_movie(&mut self, movie: Movie) -> Result<(), CatalogError> {
        let id = movie.movie_id();
        if self.movies.contains_key(&id) {
            return Err(CatalogError::DuplicateMovieId(id));
        }
        self.movies.insert(id, movie);
        self.order.push(id);
        Ok(())
    }

    /// Looks up a movie by ID.
    ///
    /// # Errors
    /// Returns [`CatalogError::MovieNotFound`] carrying the requested ID
    /// when no movie matches.
    pub fn select_movie(&self, movie_id: u32) -> Result<&Movie, CatalogError> {
        self.movies
            .get(&movie_id)
            .ok_or(CatalogError::MovieNotFound(movie_id))
    }

    /// Mutable lookup, used by the ticket-purchase flow to reserve seats.
    pub fn select_movie_mut(&mut self, movie_id: u32) -> Result<&mut Movie, CatalogError> {
        self.movies
            .get_mut(&movie_id)
            .ok_or(CatalogError::MovieNotFound(movie_id))
    }

    /// Whether a movie with this ID exists.
    pub fn is_valid_movie(&self, movie_id: u32) -> bool {
        self.movies.contains_key(&movie_id)
    }

    /// Whether any movie of the given genre is showing. Genre comparison
    /// is case-insensitive, matching the search side of the catalog.
    pub fn is_movie_showing(&self, genre: &str) -> bool {
        self.movies()
            .any(|movie| movie.genre().eq_ignore_ascii_case(genre))
    }

    /// Distinct trimmed genre strings across the catalog. Membership is
    /// case-sensitive (unlike genre search); the set is ordered so reports
    /// are deterministic.
    pub fn available_genres(&self) -> BTreeSet<String> {
        self.movies()
            .map(|movie| movie.genre().trim().to_string())
            .collect()
    }

    /// Movies in insertion order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.order.iter().filter_map(|id| self.movies.get(id))
    }

    /// All movies as a listing with an explicit empty state.
    pub fn movie_listing(&self) -> MovieListing {
        if self.movies.is_empty() {
            return MovieListing::Empty;
        }
        MovieListing::Showing(self.movies().map(Movie::summary).collect())
    }

    /// Movies matching the genre, case-insensitively, in insertion order.
    pub fn movies_by_genre(&self, genre: &str) -> Vec<MovieSummary> {
        self.movies()
            .filter(|movie| movie.genre().eq_ignore_ascii_case(genre))
            .map(Movie::summary)
            .collect()
    }

    /// Adds an item to the food-and-drink menu.
    ///
    /// This is where the non-negative price invariant is enforced: the
    /// struct fields are public, so the menu gate validates rather than
    /// the value object itself.
    ///
    /// # Errors
    /// Returns [`CatalogError::NegativeMenuItemPrice`] for a negative
    /// price; the menu is left unchanged.
    pub fn add_menu_item(&mut self, item: FoodAndDrink) -> Result<(), CatalogError> {
        if item.price < 0.0 {
            return Err(CatalogError::NegativeMenuItemPrice(item.name));
        }
        self.menu.push(item);
        Ok(())
    }

    /// The menu in insertion order.
    pub fn menu(&self) -> &[FoodAndDrink] {
        &self.menu
    }

    /// Looks up a menu item by exact name.
    ///
    /// # Errors
    /// Returns [`CatalogError::MenuItemNotFound`] when the theater does
    /// not sell an item of that name.
    pub fn menu_item(&self, name: &str) -> Result<&FoodAndDrink, CatalogError> {
        self.menu
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| CatalogError::MenuItemNotFound(name.to_string()))
    }

    /// Records a sold ticket in the theater's ledger.
    pub fn record_sale(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Every ticket sold at this theater, in sale order.
    pub fn ticket_sales(&self) -> &[Ticket] {
        &self.tickets
    }
}
