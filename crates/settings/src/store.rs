//! The settings store itself (single-owner, not thread-aware).
//!
//! Entries keep insertion order so that saved files and dumps are
//! deterministic. Overwriting an existing key keeps its original position.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{SettingsError, SettingsResult};
use crate::format;
use crate::source::{DatabaseStub, Defaults, SettingsSource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsStore {
    entries: IndexMap<String, String>,
    #[serde(skip)]
    loaded: bool,
}

impl SettingsStore {
    /// Create an empty, unloaded store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace all entries with the built-in defaults.
    pub fn load_defaults(&mut self) {
        self.entries.clear();
        self.merge(Defaults.fetch(""));
        self.loaded = true;
        tracing::info!(entries = self.entries.len(), "settings loaded from defaults");
    }

    /// Merge entries from the database stand-in.
    pub fn load_from_source(&mut self, identifier: &str) {
        self.load_from(&DatabaseStub, identifier);
    }

    /// Merge entries from an arbitrary source. Existing keys are overwritten,
    /// unrelated keys are kept.
    pub fn load_from(&mut self, source: &dyn SettingsSource, identifier: &str) {
        self.merge(source.fetch(identifier));
        self.loaded = true;
        tracing::info!(
            source = source.name(),
            identifier,
            entries = self.entries.len(),
            "settings loaded from source"
        );
    }

    /// Replace all entries with the contents of a `key = value` file.
    ///
    /// Fails with [`SettingsError::NotFound`] if `path` does not exist. The
    /// file is read completely before the store is touched, so a failed load
    /// leaves existing entries intact.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SettingsError::NotFound(path.to_path_buf()),
            _ => SettingsError::Io(err),
        })?;
        self.entries.clear();
        self.merge(format::parse(&text));
        self.loaded = true;

        tracing::info!(path = %path.display(), entries = self.entries.len(), "settings loaded from file");
        Ok(())
    }

    /// Strict read.
    pub fn get(&self, key: &str) -> SettingsResult<&str> {
        if !self.loaded {
            return Err(SettingsError::NotLoaded);
        }
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| SettingsError::KeyNotFound(key.to_string()))
    }

    /// Lenient read: `fallback` when unloaded or the key is absent.
    pub fn get_or_default<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        if !self.loaded {
            return fallback;
        }
        self.entries.get(key).map(String::as_str).unwrap_or(fallback)
    }

    /// Insert or overwrite `key`. An unloaded store loads the defaults first.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if !self.loaded {
            self.load_defaults();
        }
        self.entries.insert(key.into(), value.into());
    }

    /// Write every entry as one `key = value` line, in insertion order.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        fs::write(path, self.dump())?;
        tracing::info!(path = %path.display(), entries = self.entries.len(), "settings saved to file");
        Ok(())
    }

    /// All entries rendered in file format.
    pub fn dump(&self) -> String {
        format::render(self.entries())
    }

    fn merge(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        self.entries.extend(entries);
    }
}
