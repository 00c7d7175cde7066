use serde::{Deserialize, Serialize};

use patternforge_core::ValueObject;

/// Order line: product name, unit price, quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Decimal price per unit; expected non-negative, not validated.
    pub unit_price: f64,
    pub quantity: u32,
}

impl ValueObject for LineItem {}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// `unit_price × quantity`.
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl core::fmt::Display for LineItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (price: {:.2}, qty: {}, total: {:.2})",
            self.name,
            self.unit_price,
            self.quantity,
            self.total()
        )
    }
}
