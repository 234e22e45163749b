//! The chain root: a cinema and its theaters.

use std::collections::HashMap;

use crate::error::{CatalogError, RegistryError};
use crate::registry::InstanceRegistry;

use super::theater::Theater;

/// The root of the booking hierarchy. A cinema owns its theaters
/// exclusively, keyed by `theater_id` with an insertion-order index.
///
/// # Cap policy
/// Cinema uses the *strict* instance-cap policy: construction past the
/// registry cap fails with [`RegistryError::InstanceLimitExceeded`]
/// instead of degrading the way [`Theater`] does.
#[derive(Debug)]
pub struct Cinema {
    theaters: HashMap<u32, Theater>,
    order: Vec<u32>,
}

impl Cinema {
    /// Constructs a cinema, claiming a slot from the registry.
    ///
    /// # Errors
    /// Returns [`RegistryError::InstanceLimitExceeded`] once the cap is
    /// reached.
    pub fn new(registry: &InstanceRegistry) -> Result<Self, RegistryError> {
        registry.acquire_cinema()?;
        Ok(Self {
            theaters: HashMap::new(),
            order: Vec::new(),
        })
    }

    /// Adds a theater to the chain.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateTheaterId`] if the ID is already
    /// in use.
    pub fn add_theater(&mut self, theater: Theater) -> Result<(), CatalogError> {
        let id = theater.theater_id();
        if self.theaters.contains_key(&id) {
            return Err(CatalogError::DuplicateTheaterId(id));
        }
        self.theaters.insert(id, theater);
        self.order.push(id);
        Ok(())
    }

    /// Looks up a theater by ID.
    ///
    /// # Errors
    /// Returns [`CatalogError::TheaterNotFound`] carrying the requested ID
    /// when no theater matches.
    pub fn select_theater(&self, theater_id: u32) -> Result<&Theater, CatalogError> {
        self.theaters
            .get(&theater_id)
            .ok_or(CatalogError::TheaterNotFound(theater_id))
    }

    /// Mutable lookup, used by catalog updates and the purchase flow.
    pub fn select_theater_mut(&mut self, theater_id: u32) -> Result<&mut Theater, CatalogError> {
        self.theaters
            .get_mut(&theater_id)
            .ok_or(CatalogError::TheaterNotFound(theater_id))
    }

    /// Whether a theater with this ID exists.
    pub fn is_valid_theater(&self, theater_id: u32) -> bool {
        self.theaters.contains_key(&theater_id)
    }

    /// Number of theaters in the chain.
    pub fn total_theaters(&self) -> usize {
        self.theaters.len()
    }

    /// Theaters in insertion order.
    pub fn theaters(&self) -> impl Iterator<Item = &Theater> {
        self.order.iter().filter_map(|id| self.theaters.get(id))
    }
}
