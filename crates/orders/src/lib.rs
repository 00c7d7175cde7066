//! Orders domain module.
//!
//! An order aggregates line items, a delivery cost, an optional percentage
//! discount and a payment method, and can be duplicated into an independent
//! copy. Pure domain logic: no IO, no storage.

pub mod discount;
pub mod line_item;
pub mod order;

pub use discount::Discount;
pub use line_item::LineItem;
pub use order::{DEFAULT_PAYMENT_METHOD, DUPLICATE_SUFFIX, Order};
