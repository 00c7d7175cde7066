//! Shared access to a single settings store.
//!
//! [`SharedSettings`] is a cheap, cloneable handle; all clones point at the
//! same store and every mutation is serialized under one lock.
//! [`SettingsCell`] is the init-once guard the entry point owns: however many
//! call sites ask it for an instance, exactly one store is constructed.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::error::{SettingsError, SettingsResult};
use crate::store::SettingsStore;

#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<Mutex<SettingsStore>>,
}

impl SharedSettings {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Whether both handles refer to the same underlying store.
    pub fn same_instance(&self, other: &SharedSettings) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> SettingsResult<MutexGuard<'_, SettingsStore>> {
        self.inner.lock().map_err(|_| SettingsError::Poisoned)
    }

    pub fn load_defaults(&self) -> SettingsResult<()> {
        self.lock()?.load_defaults();
        Ok(())
    }

    pub fn load_from_source(&self, identifier: &str) -> SettingsResult<()> {
        self.lock()?.load_from_source(identifier);
        Ok(())
    }

    pub fn load_from_file(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        self.lock()?.load_from_file(path)
    }

    pub fn get(&self, key: &str) -> SettingsResult<String> {
        self.lock()?.get(key).map(str::to_string)
    }

    /// Lenient read. A poisoned lock is treated like an unloaded store.
    pub fn get_or_default(&self, key: &str, fallback: &str) -> String {
        match self.lock() {
            Ok(store) => store.get_or_default(key, fallback).to_string(),
            Err(_) => fallback.to_string(),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> SettingsResult<()> {
        self.lock()?.set(key, value);
        Ok(())
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        self.lock()?.save_to_file(path)
    }

    /// A point-in-time copy of the store.
    pub fn snapshot(&self) -> SettingsResult<SettingsStore> {
        Ok(self.lock()?.clone())
    }
}

/// Lazily constructs one [`SharedSettings`] and hands out handles to it.
#[derive(Debug, Default)]
pub struct SettingsCell {
    cell: OnceLock<SharedSettings>,
}

impl SettingsCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Handle to the single store, constructing it (empty, unloaded) on first
    /// call. Concurrent first calls never construct twice.
    pub fn instance(&self) -> SharedSettings {
        self.cell
            .get_or_init(|| {
                tracing::debug!("settings store constructed");
                SharedSettings::default()
            })
            .clone()
    }
}
