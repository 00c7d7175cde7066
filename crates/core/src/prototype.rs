//! Duplication of domain objects into independent copies.

/// A type that can produce a fully independent duplicate of itself.
///
/// The duplicate owns every sub-entity it holds; mutating it never affects the
/// source and vice versa. Unlike [`Clone`], a duplicate is allowed to differ
/// from its source in identity (an entity receives a derived identifier).
///
/// Value objects get this for free:
///
/// ```
/// use patternforge_core::{Prototype, ValueObject};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tag(String);
/// impl ValueObject for Tag {}
///
/// let a = Tag("x".into());
/// assert_eq!(a.duplicate(), a);
/// ```
pub trait Prototype {
    fn duplicate(&self) -> Self;
}

impl<T: crate::ValueObject> Prototype for T {
    fn duplicate(&self) -> Self {
        self.clone()
    }
}
