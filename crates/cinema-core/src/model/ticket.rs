//! Tickets and the seat/age pricing tiers they are priced from.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Seat category, each with a base price in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatType {
    Standard,
    Premium,
    Recliner,
}

impl SeatType {
    /// Base ticket price for this seat category, before age pricing.
    pub fn base_price(self) -> f64 {
        match self {
            SeatType::Standard => 12.50,
            SeatType::Premium => 16.00,
            SeatType::Recliner => 19.50,
        }
    }
}

impl Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeatType::Standard => "Standard",
            SeatType::Premium => "Premium",
            SeatType::Recliner => "Recliner",
        };
        write!(f, "{name}")
    }
}

/// Age-based pricing tier, applied as a multiplier on the seat base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgePricing {
    Child,
    Adult,
    Senior,
}

impl AgePricing {
    /// Multiplier applied to the seat base price.
    pub fn multiplier(self) -> f64 {
        match self {
            AgePricing::Child => 0.5,
            AgePricing::Adult => 1.0,
            AgePricing::Senior => 0.8,
        }
    }
}

impl Display for AgePricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgePricing::Child => "Child",
            AgePricing::Adult => "Adult",
            AgePricing::Senior => "Senior",
        };
        write!(f, "{name}")
    }
}

/// A sold seat: seat number, category, pricing tier, and the derived price.
///
/// The price is computed at construction (seat base price x age
/// multiplier, rounded to cents) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    seat_number: String,
    seat_type: SeatType,
    age_pricing: AgePricing,
    price: f64,
}

impl Ticket {
    pub fn new(seat_number: impl Into<String>, seat_type: SeatType, age_pricing: AgePricing) -> Self {
        let price = round_to_cents(seat_type.base_price() * age_pricing.multiplier());
        Self {
            seat_number: seat_number.into(),
            seat_type,
            age_pricing,
            price,
        }
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn seat_type(&self) -> SeatType {
        self.seat_type
    }

    pub fn age_pricing(&self) -> AgePricing {
        self.age_pricing
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Rounds a dollar amount to two decimal places.
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
