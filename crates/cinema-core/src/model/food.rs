//! Food and drink menu items.

use serde::{Deserialize, Serialize};

/// A concession item on a theater's menu: a name and a non-negative price.
///
/// Pure value object; cheap to clone into transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAndDrink {
    pub name: String,
    pub price: f64,
}

impl FoodAndDrink {
    /// Creates a new menu item.
    ///
    /// The fields are public, so the non-negative price invariant is
    /// enforced where items enter the system:
    /// [`Theater::add_menu_item`](crate::model::theater::Theater::add_menu_item)
    /// rejects a negative price. The assertion here only catches mistakes
    /// early in debug builds.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        debug_assert!(price >= 0.0, "menu prices are non-negative");
        Self {
            name: name.into(),
            price,
        }
    }
}
