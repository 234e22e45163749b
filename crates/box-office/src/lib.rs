//! # Box Office
//!
//! Async service layer for the cinema booking core. One actor owns the
//! [`Cinema`](cinema_core::model::Cinema) catalog and processes requests
//! sequentially; clones of [`BoxOfficeClient`](client::BoxOfficeClient) talk
//! to it over a channel from any task.
//!
//! ## Core Components
//!
//! - **[actor]**: The server half. Owns the catalog, serializes all access.
//! - **[client]**: Type-safe handle that hides the message passing.
//! - **[message]**: The request enum and the purchase DTOs.
//! - **[lifecycle]**: The [`CinemaSystem`](lifecycle::CinemaSystem)
//!   orchestrator for startup and graceful shutdown.
//! - **[mock]**: Test utilities for exercising client logic without a
//!   running actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::BoxOfficeActor;
pub use client::BoxOfficeClient;
pub use error::BoxOfficeError;
pub use lifecycle::CinemaSystem;
pub use message::{BoxOfficeRequest, Receipt, TicketOrder};
