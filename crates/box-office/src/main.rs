//! Demo walk-through: stand up the system, build a small catalog, and sell
//! one ticket with concessions.
//!
//! Run with `RUST_LOG=info cargo run -p box-office` to watch the flow.

use box_office::lifecycle::CinemaSystem;
use box_office::message::TicketOrder;
use box_office::tracing::setup_tracing;
use cinema_core::model::{
    AgePricing, Customer, FoodAndDrink, MovieCreate, SeatType, ShowtimeCreate, TheaterCreate,
};
use cinema_core::TransactionType;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting box office");

    let system = CinemaSystem::new().map_err(|e| e.to_string())?;

    // Build a small catalog: one theater, one movie, two showtimes, a menu.
    let catalog_span = tracing::info_span!("catalog_setup");
    async {
        system
            .box_office
            .add_theater(TheaterCreate {
                theater_id: 1,
                address: "123 Main St".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;

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
            .map_err(|e| e.to_string())?;

        for (showtime_id, time, seats) in [(100, "18:00", 50), (101, "21:00", 30)] {
            system
                .box_office
                .add_showtime(
                    1,
                    10,
                    ShowtimeCreate {
                        showtime_id,
                        time: time.to_string(),
                        available_seats: seats,
                    },
                )
                .await
                .map_err(|e| e.to_string())?;
        }

        system
            .box_office
            .add_menu_item(1, FoodAndDrink::new("Popcorn", 5.00))
            .await
            .map_err(|e| e.to_string())?;
        system
            .box_office
            .add_menu_item(1, FoodAndDrink::new("Soda", 3.00))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(catalog_span)
    .await?;

    info!(
        theaters = system
            .box_office
            .total_theaters()
            .await
            .map_err(|e| e.to_string())?,
        "Catalog ready"
    );

    // Sell one ticket.
    let order = TicketOrder {
        theater_id: 1,
        movie_id: 10,
        showtime_id: 100,
        seat_number: "A1".to_string(),
        seat_type: SeatType::Standard,
        age_pricing: AgePricing::Adult,
        customer: Customer::new("Ada Lovelace", "ada@example.com", "555-0100"),
        menu_selections: vec!["Popcorn".to_string(), "Soda".to_string()],
        transaction_type: TransactionType::Card,
    };

    let span = tracing::info_span!("ticket_purchase");
    let result = async {
        info!("Processing ticket purchase");
        system.box_office.purchase(order).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(receipt) => {
            info!(
                total = receipt.total,
                remaining_seats = receipt.remaining_seats,
                "Purchase complete"
            );
            println!("{}", receipt.text);
        }
        Err(e) => error!(error = %e, "Purchase failed"),
    }

    system.shutdown().await?;

    info!("Done");
    Ok(())
}
