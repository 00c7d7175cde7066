//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two line items with the same name, price and quantity are
//! the same line item as far as the domain is concerned.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Discount { label: "Winter", percentage: 10.0 }`)
/// - **Entity**: has identity (`Order { id: OrderId("ORD-001"), .. }`)
///
/// The trait requires `Clone` because copying a value object must always
/// produce an independent value; there is no shared interior state to alias.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
