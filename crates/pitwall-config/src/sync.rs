//! Remote sync configuration.
//!
//! Sync is feature-gated by configuration presence: when the base URL or
//! auth key is missing the remote collaborator is simply disabled, never a
//! crash.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Base URL of the sync server (e.g., `https://scout.example.org`).
    #[serde(default)]
    pub base_url: String,

    /// Auth key sent in the `Authorization` header.
    #[serde(default)]
    pub auth_key: String,
}

impl SyncConfig {
    /// Check if the sync config has the fields required for remote access.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.auth_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!SyncConfig::default().is_configured());
    }

    #[test]
    fn configured_when_url_and_key_set() {
        let config = SyncConfig {
            base_url: "https://scout.example.org".into(),
            auth_key: "key123".into(),
        };
        assert!(config.is_configured());
    }

    #[test]
    fn url_alone_is_not_enough() {
        let config = SyncConfig {
            base_url: "https://scout.example.org".into(),
            auth_key: String::new(),
        };
        assert!(!config.is_configured());
    }
}
