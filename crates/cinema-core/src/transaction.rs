//! # Transactions and Receipts
//!
//! A [`Transaction`] collects the pieces of one ticket sale (customer,
//! movie, showtime, ticket, concessions) and renders a plain-text receipt
//! with a deterministic two-decimal money format.
//!
//! The transaction holds owned snapshots, not references into the catalog:
//! the receipt keeps describing the sale as it happened even after seat
//! counts move on.

use std::fmt::{self, Display, Write as _};

use serde::{Deserialize, Serialize};

use crate::error::TransactionError;
use crate::model::customer::Customer;
use crate::model::food::FoodAndDrink;
use crate::model::movie::MovieSummary;
use crate::model::showtime::Showtime;
use crate::model::ticket::{round_to_cents, Ticket};

/// Reminder issued alongside cash sales.
pub const CASH_REMINDER: &str = "Cash transactions must be processed at the counter.";

/// Payment method recorded on a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Card,
    Cash,
    /// A payment method outside the built-in list, kept verbatim.
    Other(String),
}

impl TransactionType {
    /// The built-in payment methods, rendered the way the front desk
    /// announces them.
    pub fn listing() -> &'static str {
        "Transaction types: ID: 1, Card; ID: 2, Cash"
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Card => write!(f, "Card"),
            TransactionType::Cash => write!(f, "Cash"),
            TransactionType::Other(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        match value {
            "Card" => TransactionType::Card,
            "Cash" => TransactionType::Cash,
            other => TransactionType::Other(other.to_string()),
        }
    }
}

/// One ticket sale in progress or completed.
///
/// Built up field by field (or all at once through
/// [`Transaction::process_transaction`]); totals and receipts refuse to
/// render until every required reference is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    transaction_type: Option<TransactionType>,
    hold_status: bool,
    customer: Option<Customer>,
    movie: Option<MovieSummary>,
    showtime: Option<Showtime>,
    ticket: Option<Ticket>,
    selected_items: Vec<FoodAndDrink>,
}

impl Transaction {
    /// An empty transaction with nothing populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the full sale in one call.
    pub fn process_transaction(
        &mut self,
        customer: Customer,
        movie: MovieSummary,
        showtime: Showtime,
        ticket: Ticket,
        selected_items: Vec<FoodAndDrink>,
    ) {
        self.customer = Some(customer);
        self.movie = Some(movie);
        self.showtime = Some(showtime);
        self.ticket = Some(ticket);
        self.selected_items = selected_items;
    }

    pub fn select_transaction_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = Some(transaction_type);
    }

    pub fn transaction_type(&self) -> Option<&TransactionType> {
        self.transaction_type.as_ref()
    }

    /// Flags the transaction as on hold.
    pub fn add_hold_status(&mut self) {
        self.hold_status = true;
    }

    pub fn hold_status(&self) -> bool {
        self.hold_status
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    pub fn selected_items(&self) -> &[FoodAndDrink] {
        &self.selected_items
    }

    /// Ticket price plus every selected item, rounded to cents.
    ///
    /// # Errors
    /// Returns [`TransactionError::MissingTransactionData`] if no ticket
    /// has been populated yet.
    pub fn total_cost(&self) -> Result<f64, TransactionError> {
        let ticket = self
            .ticket
            .as_ref()
            .ok_or(TransactionError::MissingTransactionData("ticket"))?;
        let items: f64 = self.selected_items.iter().map(|item| item.price).sum();
        Ok(round_to_cents(ticket.price() + items))
    }

    /// Renders the receipt as plain text.
    ///
    /// Money is always printed with two decimals, and the total is
    /// independent of the order items were selected in.
    ///
    /// # Errors
    /// Returns [`TransactionError::MissingTransactionData`] naming the
    /// first unpopulated required field.
    pub fn render_receipt(&self) -> Result<String, TransactionError> {
        let customer = self
            .customer
            .as_ref()
            .ok_or(TransactionError::MissingTransactionData("customer"))?;
        let movie = self
            .movie
            .as_ref()
            .ok_or(TransactionError::MissingTransactionData("movie"))?;
        let showtime = self
            .showtime
            .as_ref()
            .ok_or(TransactionError::MissingTransactionData("showtime"))?;
        let ticket = self
            .ticket
            .as_ref()
            .ok_or(TransactionError::MissingTransactionData("ticket"))?;

        let mut receipt = String::new();
        // Infallible for String targets.
        let _ = writeln!(
            receipt,
            "Customer: {}, Email: {}, Phone: {}",
            customer.name, customer.email, customer.phone
        );
        let _ = writeln!(
            receipt,
            "Showtime: ID: {}, Time: {}",
            showtime.showtime_id(),
            showtime.time()
        );
        let _ = writeln!(receipt, "Movie: {}", movie.title);
        let _ = writeln!(
            receipt,
            "Seat: {}, Type: {}, Pricing: {}",
            ticket.seat_number(),
            ticket.seat_type(),
            ticket.age_pricing()
        );
        let _ = writeln!(receipt, "\nTicket price: ${:.2}", ticket.price());

        let _ = writeln!(receipt, "\nSelected Food and Drinks:");
        for item in &self.selected_items {
            let _ = writeln!(receipt, "{:<10} - ${:.2}", item.name, item.price);
        }

        let _ = writeln!(receipt, "\nTotal Cost: ${:.2}", self.total_cost()?);
        receipt.push_str("----------------------------------------------\n");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ticket::{AgePricing, SeatType};

    fn sample_transaction() -> Transaction {
        let mut transaction = Transaction::new();
        transaction.process_transaction(
            Customer::new("Ada Lovelace", "ada@example.com", "555-0100"),
            MovieSummary {
                movie_id: 10,
                title: "Alpha".to_string(),
                genre: "Action".to_string(),
            },
            Showtime::new(100, "18:00", 50),
            Ticket::new("A1", SeatType::Standard, AgePricing::Adult),
            vec![
                FoodAndDrink::new("Popcorn", 5.00),
                FoodAndDrink::new("Soda", 3.00),
            ],
        );
        transaction
    }

    #[test]
    fn total_sums_ticket_and_items() {
        let transaction = sample_transaction();
        // 12.50 ticket + 5.00 + 3.00
        assert!((transaction.total_cost().expect("complete sale") - 20.50).abs() < 1e-9);
    }

    #[test]
    fn total_is_order_independent() {
        let mut reversed = Transaction::new();
        reversed.process_transaction(
            Customer::new("Ada Lovelace", "ada@example.com", "555-0100"),
            MovieSummary {
                movie_id: 10,
                title: "Alpha".to_string(),
                genre: "Action".to_string(),
            },
            Showtime::new(100, "18:00", 50),
            Ticket::new("A1", SeatType::Standard, AgePricing::Adult),
            vec![
                FoodAndDrink::new("Soda", 3.00),
                FoodAndDrink::new("Popcorn", 5.00),
            ],
        );
        assert_eq!(
            sample_transaction().total_cost().expect("complete sale"),
            reversed.total_cost().expect("complete sale")
        );
    }

    #[test]
    fn receipt_renders_exactly() {
        let receipt = sample_transaction()
            .render_receipt()
            .expect("complete sale");
        let expected = "\
Customer: Ada Lovelace, Email: ada@example.com, Phone: 555-0100
Showtime: ID: 100, Time: 18:00
Movie: Alpha
Seat: A1, Type: Standard, Pricing: Adult

Ticket price: $12.50

Selected Food and Drinks:
Popcorn    - $5.00
Soda       - $3.00

Total Cost: $20.50
----------------------------------------------
";
        assert_eq!(receipt, expected);
    }

    #[test]
    fn receipt_with_no_items_still_renders() {
        let mut transaction = Transaction::new();
        transaction.process_transaction(
            Customer::new("Ada Lovelace", "ada@example.com", "555-0100"),
            MovieSummary {
                movie_id: 10,
                title: "Alpha".to_string(),
                genre: "Action".to_string(),
            },
            Showtime::new(100, "18:00", 50),
            Ticket::new("A1", SeatType::Standard, AgePricing::Adult),
            Vec::new(),
        );
        let receipt = transaction.render_receipt().expect("complete sale");
        assert!(receipt.contains("Selected Food and Drinks:\n\nTotal Cost: $12.50"));
    }

    #[test]
    fn incomplete_transaction_refuses_to_render() {
        let empty = Transaction::new();
        assert_eq!(
            empty.total_cost().unwrap_err(),
            TransactionError::MissingTransactionData("ticket")
        );
        let err = empty.render_receipt().unwrap_err();
        assert_eq!(err, TransactionError::MissingTransactionData("customer"));
        assert_eq!(
            err.to_string(),
            "Transaction is missing required data: customer"
        );
    }

    #[test]
    fn hold_and_payment_type_are_recorded() {
        let mut transaction = sample_transaction();
        assert!(!transaction.hold_status());
        transaction.add_hold_status();
        assert!(transaction.hold_status());

        transaction.select_transaction_type(TransactionType::from("Cash"));
        assert_eq!(
            transaction.transaction_type(),
            Some(&TransactionType::Cash)
        );
        assert_eq!(TransactionType::from("Venmo").to_string(), "Venmo");
        assert_eq!(
            TransactionType::listing(),
            "Transaction types: ID: 1, Card; ID: 2, Cash"
        );
    }
}
