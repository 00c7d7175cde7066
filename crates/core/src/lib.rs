//! `patternforge-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod entity;
pub mod id;
pub mod prototype;
pub mod value_object;

pub use entity::Entity;
pub use id::OrderId;
pub use prototype::Prototype;
pub use value_object::ValueObject;
