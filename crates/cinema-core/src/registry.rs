//! # Instance Registry
//!
//! Tracks how many aggregate-root instances (Cinema, Theater) have ever
//! been constructed and enforces the per-type cap of [`MAX_INSTANCES`].
//!
//! # Architecture Note
//! The counters are owned by an explicit, injectable registry object
//! rather than hidden global state. Constructors take a `&InstanceRegistry`
//! so tests can run against isolated registries, and the test-only
//! [`InstanceRegistry::reset`] hook replaces ad-hoc static resets.
//!
//! **Concurrency**: both counters are atomics and the check-then-increment
//! is a single atomic `fetch_update`, so the registry stays correct when
//! constructors race from concurrent tasks. A plain check followed by an
//! increment would admit more than [`MAX_INSTANCES`] creations under
//! contention.
//!
//! The two aggregate types carry different cap policies:
//! - **Cinema** is strict: [`InstanceRegistry::acquire_cinema`] fails the
//!   101st construction with [`RegistryError::InstanceLimitExceeded`].
//! - **Theater** degrades: [`InstanceRegistry::try_acquire_theater`]
//!   returns `false` past the cap and the constructor yields a blank,
//!   zero-valued theater instead of failing.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::RegistryError;

/// Process-wide cap on Cinema and Theater constructions.
pub const MAX_INSTANCES: u32 = 100;

/// Counts aggregate-root constructions and enforces the instance caps.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    cinemas: AtomicU32,
    theaters: AtomicU32,
}

impl InstanceRegistry {
    /// Creates a registry with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a construction slot for a Cinema.
    ///
    /// # Errors
    /// Returns [`RegistryError::InstanceLimitExceeded`] once
    /// [`MAX_INSTANCES`] cinemas have been constructed. The counter is not
    /// advanced by a failed claim.
    pub fn acquire_cinema(&self) -> Result<(), RegistryError> {
        if Self::acquire(&self.cinemas) {
            Ok(())
        } else {
            Err(RegistryError::InstanceLimitExceeded {
                kind: "Cinema",
                cap: MAX_INSTANCES,
            })
        }
    }

    /// Claims a construction slot for a Theater.
    ///
    /// Returns `false` once [`MAX_INSTANCES`] theaters have been
    /// constructed; the caller is expected to degrade rather than fail.
    pub fn try_acquire_theater(&self) -> bool {
        Self::acquire(&self.theaters)
    }

    /// Number of cinemas ever constructed through this registry.
    pub fn cinema_count(&self) -> u32 {
        self.cinemas.load(Ordering::SeqCst)
    }

    /// Number of theaters ever constructed through this registry.
    pub fn theater_count(&self) -> u32 {
        self.theaters.load(Ordering::SeqCst)
    }

    /// Resets both counters. Test builds only.
    #[cfg(any(test, feature = "testing"))]
    pub fn reset(&self) {
        self.cinemas.store(0, Ordering::SeqCst);
        self.theaters.store(0, Ordering::SeqCst);
    }

    // Check-then-increment as one atomic operation.
    fn acquire(counter: &AtomicU32) -> bool {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < MAX_INSTANCES).then_some(n + 1)
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cinema_cap_is_strict() {
        let registry = InstanceRegistry::new();
        for _ in 0..MAX_INSTANCES {
            registry.acquire_cinema().expect("under the cap");
        }
        assert_eq!(registry.cinema_count(), MAX_INSTANCES);

        let err = registry.acquire_cinema().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Maximum number of Cinema instances (100) reached."
        );
        // A failed claim must not advance the counter.
        assert_eq!(registry.cinema_count(), MAX_INSTANCES);
    }

    #[test]
    fn theater_cap_degrades() {
        let registry = InstanceRegistry::new();
        for _ in 0..MAX_INSTANCES {
            assert!(registry.try_acquire_theater());
        }
        assert!(!registry.try_acquire_theater());
        assert_eq!(registry.theater_count(), MAX_INSTANCES);
    }

    #[test]
    fn reset_clears_both_counters() {
        let registry = InstanceRegistry::new();
        registry.acquire_cinema().expect("first cinema");
        assert!(registry.try_acquire_theater());

        registry.reset();
        assert_eq!(registry.cinema_count(), 0);
        assert_eq!(registry.theater_count(), 0);
    }
}
