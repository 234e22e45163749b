//! Errors surfaced by the box-office service layer.

use cinema_core::{CatalogError, RegistryError, TransactionError};
use thiserror::Error;

/// Everything a box-office request can fail with: either a domain error
/// from the core, or a channel failure between client and actor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxOfficeError {
    /// The actor's channel is closed; the box office has shut down.
    #[error("box office is closed")]
    Closed,

    /// The actor dropped the response channel without answering.
    #[error("box office dropped the request")]
    Dropped,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
