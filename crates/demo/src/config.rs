//! Demo configuration, read from the environment with defaults.

use std::path::PathBuf;

use patternforge_observability::{LogFormat, ObservabilityConfig};

pub const SETTINGS_FILE_VAR: &str = "PATTERNFORGE_SETTINGS_FILE";
pub const LOG_FORMAT_VAR: &str = "PATTERNFORGE_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Where the settings scenario saves and reloads the store.
    pub settings_file: PathBuf,
    pub observability: ObservabilityConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            settings_file: PathBuf::from("config.txt"),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(SETTINGS_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.settings_file = PathBuf::from(path);
        }

        match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => {
                config.observability.format = LogFormat::Json;
            }
            _ => {}
        }

        config
    }
}
