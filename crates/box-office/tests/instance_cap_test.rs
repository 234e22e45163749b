use std::sync::Arc;

use box_office::error::BoxOfficeError;
use box_office::lifecycle::CinemaSystem;
use cinema_core::model::TheaterCreate;
use cinema_core::{CatalogError, InstanceRegistry, MAX_INSTANCES};

/// With the cinema counter already at the cap, the system refuses to start.
#[tokio::test]
async fn test_cinema_cap_blocks_startup() {
    let registry = Arc::new(InstanceRegistry::new());
    for _ in 0..MAX_INSTANCES {
        registry.acquire_cinema().expect("under the cap");
    }

    let err = CinemaSystem::with_registry(registry.clone()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Maximum number of Cinema instances (100) reached."
    );

    // Resetting the counters (test hook) makes startup possible again.
    registry.reset();
    let system = CinemaSystem::with_registry(registry).expect("registry was reset");
    system.shutdown().await.unwrap();
}

/// Theater creation past the cap degrades: the request succeeds but the
/// theater is a blank instance with ID 0.
#[tokio::test]
async fn test_theater_cap_degrades() {
    let registry = Arc::new(InstanceRegistry::new());
    // Exhaust the theater slots up front.
    for _ in 0..MAX_INSTANCES {
        assert!(registry.try_acquire_theater());
    }

    let system = CinemaSystem::with_registry(registry.clone()).unwrap();

    system
        .box_office
        .add_theater(TheaterCreate {
            theater_id: 500,
            address: "500 Late Ln".to_string(),
        })
        .await
        .expect("degraded creation still succeeds");

    // The blank instance registers under ID 0, not the requested ID.
    assert!(!system.box_office.is_valid_theater(500).await.unwrap());
    assert!(system.box_office.is_valid_theater(0).await.unwrap());
    let blank = system.box_office.get_theater(0).await.unwrap();
    assert_eq!(blank.address(), "");
    assert_eq!(registry.theater_count(), MAX_INSTANCES);

    // Every blank carries ID 0, so a cinema holds at most one: the next
    // past-cap add collides instead of degrading again.
    let err = system
        .box_office
        .add_theater(TheaterCreate {
            theater_id: 501,
            address: "501 Late Ln".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, BoxOfficeError::Catalog(CatalogError::DuplicateTheaterId(0)));

    system.shutdown().await.unwrap();
}
