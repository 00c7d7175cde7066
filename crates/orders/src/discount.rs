use serde::{Deserialize, Serialize};

use patternforge_core::ValueObject;

/// Percentage discount. The percentage is not validated; values outside
/// `0..=100` produce negative or amplified totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub label: String,
    pub percentage: f64,
}

impl ValueObject for Discount {}

impl Discount {
    pub fn new(label: impl Into<String>, percentage: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }

    /// `amount × (1 − percentage / 100)`.
    pub fn apply(&self, amount: f64) -> f64 {
        amount * (1.0 - self.percentage / 100.0)
    }
}

impl core::fmt::Display for Discount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}%)", self.label, self.percentage)
    }
}
