use box_office::error::BoxOfficeError;
use box_office::lifecycle::CinemaSystem;
use box_office::message::TicketOrder;
use cinema_core::model::{
    AgePricing, Customer, FoodAndDrink, MovieCreate, MovieListing, SeatType, ShowtimeCreate,
    TheaterCreate,
};
use cinema_core::{CatalogError, TransactionType};

fn sample_order(showtime_id: u32, seat_number: &str) -> TicketOrder {
    TicketOrder {
        theater_id: 1,
        movie_id: 10,
        showtime_id,
        seat_number: seat_number.to_string(),
        seat_type: SeatType::Standard,
        age_pricing: AgePricing::Adult,
        customer: Customer::new("Ada Lovelace", "ada@example.com", "555-0100"),
        menu_selections: vec!["Popcorn".to_string(), "Soda".to_string()],
        transaction_type: TransactionType::Card,
    }
}

async fn seeded_system() -> CinemaSystem {
    let system = CinemaSystem::new().expect("fresh registry is under the cap");

    system
        .box_office
        .add_theater(TheaterCreate {
            theater_id: 1,
            address: "123 Main St".to_string(),
        })
        .await
        .expect("Failed to add theater");

    system
        .box_office
        .add_movie(
            1,
            MovieCreate {
                movie_id: 10,
                title: "The Marquee".to_string(),
                genre: "Drama".to_string(),
            },
        )
        .await
        .expect("Failed to add movie");

    system
        .box_office
        .add_showtime(
            1,
            10,
            ShowtimeCreate {
                showtime_id: 100,
                time: "18:00".to_string(),
                available_seats: 50,
            },
        )
        .await
        .expect("Failed to add showtime");

    system
        .box_office
        .add_menu_item(1, FoodAndDrink::new("Popcorn", 5.00))
        .await
        .expect("Failed to add menu item");
    system
        .box_office
        .add_menu_item(1, FoodAndDrink::new("Soda", 3.00))
        .await
        .expect("Failed to add menu item");

    system
}

/// Full end-to-end flow: build the catalog, query it, sell a ticket, and
/// check the receipt and the seat count.
#[tokio::test]
async fn test_full_booking_flow() {
    let system = seeded_system().await;

    // Catalog queries
    assert_eq!(system.box_office.total_theaters().await.unwrap(), 1);
    assert!(system.box_office.is_valid_theater(1).await.unwrap());
    assert!(!system.box_office.is_valid_theater(2).await.unwrap());
    assert!(system.box_office.is_valid_movie(1, 10).await.unwrap());
    assert!(system.box_office.is_movie_showing(1, "drama").await.unwrap());
    assert!(!system.box_office.is_movie_showing(1, "Horror").await.unwrap());
    assert_eq!(
        system.box_office.available_genres(1).await.unwrap(),
        vec!["Drama".to_string()]
    );

    match system.box_office.list_movies(1).await.unwrap() {
        MovieListing::Showing(summaries) => {
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].title, "The Marquee");
        }
        MovieListing::Empty => panic!("catalog has a movie"),
    }

    let menu = system.box_office.list_menu(1).await.unwrap();
    assert_eq!(menu.len(), 2);

    // Purchase
    let receipt = system
        .box_office
        .purchase(sample_order(100, "A1"))
        .await
        .expect("Failed to purchase");

    // 12.50 ticket + 5.00 + 3.00
    assert!((receipt.total - 20.50).abs() < 1e-9);
    assert_eq!(receipt.remaining_seats, 49);
    assert!(receipt.text.contains("Customer: Ada Lovelace, Email: ada@example.com, Phone: 555-0100"));
    assert!(receipt.text.contains("Showtime: ID: 100, Time: 18:00"));
    assert!(receipt.text.contains("Seat: A1, Type: Standard, Pricing: Adult"));
    assert!(receipt.text.contains("Total Cost: $20.50"));

    // The sale is visible in the occupancy report.
    let occupancy = system.box_office.seat_occupancy(1, 10).await.unwrap();
    assert_eq!(occupancy.len(), 1);
    assert_eq!(occupancy[0].available_seats, 49);

    // The sold ticket landed in the theater's ledger.
    let theater = system.box_office.get_theater(1).await.unwrap();
    assert_eq!(theater.ticket_sales().len(), 1);
    assert_eq!(theater.ticket_sales()[0].seat_number(), "A1");

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Lookups with unknown IDs come back as typed NotFound errors, and a failed
/// purchase changes nothing.
#[tokio::test]
async fn test_not_found_propagation() {
    let system = seeded_system().await;

    let err = system.box_office.get_theater(42).await.unwrap_err();
    assert_eq!(err, BoxOfficeError::Catalog(CatalogError::TheaterNotFound(42)));
    assert_eq!(err.to_string(), "Theater not found with ID: 42");

    let err = system.box_office.seat_occupancy(1, 999).await.unwrap_err();
    assert_eq!(err, BoxOfficeError::Catalog(CatalogError::MovieNotFound(999)));

    let err = system
        .box_office
        .purchase(sample_order(999, "A1"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BoxOfficeError::Catalog(CatalogError::ShowtimeNotFound(999))
    );

    // An unknown menu item fails the purchase before the seat is taken.
    let mut order = sample_order(100, "A1");
    order.menu_selections = vec!["Nachos".to_string()];
    let err = system.box_office.purchase(order).await.unwrap_err();
    assert_eq!(
        err,
        BoxOfficeError::Catalog(CatalogError::MenuItemNotFound("Nachos".to_string()))
    );

    let occupancy = system.box_office.seat_occupancy(1, 10).await.unwrap();
    assert_eq!(occupancy[0].available_seats, 50, "failed orders must not take seats");

    system.shutdown().await.unwrap();
}

/// Selling every seat flips the showtime to sold out; the next sale fails
/// and the count never goes negative.
#[tokio::test]
async fn test_seat_exhaustion() {
    let system = seeded_system().await;

    system
        .box_office
        .add_showtime(
            1,
            10,
            ShowtimeCreate {
                showtime_id: 101,
                time: "21:00".to_string(),
                available_seats: 2,
            },
        )
        .await
        .unwrap();

    let first = system.box_office.purchase(sample_order(101, "B1")).await.unwrap();
    assert_eq!(first.remaining_seats, 1);
    let second = system.box_office.purchase(sample_order(101, "B2")).await.unwrap();
    assert_eq!(second.remaining_seats, 0);

    let err = system
        .box_office
        .purchase(sample_order(101, "B3"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BoxOfficeError::Catalog(CatalogError::NoSeatsAvailable(101))
    );

    let occupancy = system.box_office.seat_occupancy(1, 10).await.unwrap();
    let slot = occupancy
        .iter()
        .find(|o| o.showtime_id == 101)
        .expect("showtime exists");
    assert_eq!(slot.available_seats, 0);

    system.shutdown().await.unwrap();
}

/// Concurrent purchases for a small showtime: exactly the initial seat count
/// succeeds, regardless of interleaving.
#[tokio::test]
async fn test_concurrent_purchases() {
    let system = seeded_system().await;

    system
        .box_office
        .add_showtime(
            1,
            10,
            ShowtimeCreate {
                showtime_id: 102,
                time: "23:00".to_string(),
                available_seats: 5,
            },
        )
        .await
        .unwrap();

    let mut handles = vec![];
    for i in 0..12 {
        let client = system.box_office.clone();
        handles.push(tokio::spawn(async move {
            client.purchase(sample_order(102, &format!("C{i}"))).await
        }));
    }

    let mut successful = 0;
    let mut sold_out = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(BoxOfficeError::Catalog(CatalogError::NoSeatsAvailable(102))) => sold_out += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successful, 5, "Expected exactly 5 successful purchases");
    assert_eq!(sold_out, 7, "Everyone else hits the sold-out error");

    let occupancy = system.box_office.seat_occupancy(1, 10).await.unwrap();
    let slot = occupancy.iter().find(|o| o.showtime_id == 102).unwrap();
    assert_eq!(slot.available_seats, 0, "All seats should be consumed");

    system.shutdown().await.unwrap();
}

/// A negative-priced menu item is rejected at the box office and never
/// becomes purchasable.
#[tokio::test]
async fn test_negative_menu_price_is_rejected() {
    let system = seeded_system().await;

    let refund = FoodAndDrink {
        name: "Refund Popcorn".to_string(),
        price: -50.0,
    };
    let err = system.box_office.add_menu_item(1, refund).await.unwrap_err();
    assert_eq!(
        err,
        BoxOfficeError::Catalog(CatalogError::NegativeMenuItemPrice(
            "Refund Popcorn".to_string()
        ))
    );

    // The menu still holds only the two seeded items, and a purchase
    // naming the rejected item fails instead of discounting the total.
    let menu = system.box_office.list_menu(1).await.unwrap();
    assert_eq!(menu.len(), 2);
    assert!(menu.iter().all(|item| item.price >= 0.0));

    let mut order = sample_order(100, "A1");
    order.menu_selections = vec!["Refund Popcorn".to_string()];
    let err = system.box_office.purchase(order).await.unwrap_err();
    assert_eq!(
        err,
        BoxOfficeError::Catalog(CatalogError::MenuItemNotFound(
            "Refund Popcorn".to_string()
        ))
    );

    system.shutdown().await.unwrap();
}

/// A theater with no movies reports an explicit empty listing.
#[tokio::test]
async fn test_empty_listing() {
    let system = CinemaSystem::new().unwrap();

    system
        .box_office
        .add_theater(TheaterCreate {
            theater_id: 7,
            address: "7 Side St".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        system.box_office.list_movies(7).await.unwrap(),
        MovieListing::Empty
    );
    assert!(system.box_office.available_genres(7).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
