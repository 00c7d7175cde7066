//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An `Order` is an entity keyed by its `OrderId`: a duplicate carries the same
/// contents under a derived id and is a different entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier (e.g. `ORD-001`).
    fn id(&self) -> &Self::Id;
}
