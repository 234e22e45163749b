//! # System Lifecycle & Orchestration
//!
//! Starts the box office actor, hands out its client, and coordinates a
//! clean shutdown: dropping the clients closes the channel, the actor's
//! `recv()` returns `None`, and the task exits after draining what is
//! already queued.

use std::sync::Arc;

use cinema_core::{InstanceRegistry, RegistryError};
use tracing::{error, info};

use crate::actor::BoxOfficeActor;
use crate::client::BoxOfficeClient;

const CHANNEL_BUFFER: usize = 32;

/// The runtime orchestrator: one box office actor and its client.
#[derive(Debug)]
pub struct CinemaSystem {
    /// Client for interacting with the box office actor.
    pub box_office: BoxOfficeClient,

    /// Task handles for the running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CinemaSystem {
    /// Creates a system with a fresh instance registry.
    ///
    /// # Errors
    /// Returns [`RegistryError::InstanceLimitExceeded`] if the cinema cap is
    /// already reached on the given registry.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_registry(Arc::new(InstanceRegistry::new()))
    }

    /// Creates a system on a shared registry. Lets several systems (or a
    /// test) share one set of instance-cap counters.
    pub fn with_registry(registry: Arc<InstanceRegistry>) -> Result<Self, RegistryError> {
        let (actor, box_office) = BoxOfficeActor::new(CHANNEL_BUFFER, registry)?;
        let handle = tokio::spawn(actor.run());

        Ok(Self {
            box_office,
            handles: vec![handle],
        })
    }

    /// Gracefully shuts down: drops the clients to close the channel, then
    /// waits for the actor tasks to finish.
    ///
    /// # Errors
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.box_office);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
