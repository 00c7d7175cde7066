//! Settings store: an ordered string→string configuration holder.
//!
//! The store is owned by the application entry point and shared through a
//! [`SharedSettings`] handle. A [`SettingsCell`] guards lazy first-time
//! construction so every caller observes the same instance.

pub mod error;
pub mod format;
pub mod handle;
pub mod source;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use handle::{SettingsCell, SharedSettings};
pub use source::{DatabaseStub, Defaults, SettingsSource};
pub use store::SettingsStore;
