//! Settings error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the settings crate.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file to load from does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A strict read was attempted before any load.
    #[error("settings have not been loaded")]
    NotLoaded,

    /// A strict read asked for a key that is not set.
    #[error("setting not found: {0}")]
    KeyNotFound(String),

    /// Reading or writing a settings file failed after the existence check.
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),

    /// A writer panicked while holding the shared store lock.
    #[error("settings lock poisoned")]
    Poisoned,
}
