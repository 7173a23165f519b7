//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default autosave debounce interval in milliseconds.
const fn default_autosave_debounce_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Root directory for profiles and the registry. Empty means the
    /// platform data directory (`<data_dir>/pitwall`).
    #[serde(default)]
    pub data_dir: String,

    /// Minimum spacing between autosaves under a burst of edits.
    #[serde(default = "default_autosave_debounce_ms")]
    pub autosave_debounce_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            autosave_debounce_ms: default_autosave_debounce_ms(),
        }
    }
}

impl GeneralConfig {
    /// Resolve the data directory: the configured override, or the platform
    /// data directory, or `./pitwall` as a last resort.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir()
            .map_or_else(|| PathBuf::from("pitwall"), |dir| dir.join("pitwall"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.data_dir.is_empty());
        assert_eq!(config.autosave_debounce_ms, 2000);
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = GeneralConfig {
            data_dir: "/tmp/pitwall-test".into(),
            ..GeneralConfig::default()
        };
        assert_eq!(config.resolve_data_dir(), PathBuf::from("/tmp/pitwall-test"));
    }
}
