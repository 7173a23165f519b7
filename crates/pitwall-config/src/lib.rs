//! # pitwall-config
//!
//! Layered configuration loading for Pitwall using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PITWALL_*` prefix, `__` as separator)
//! 2. User-level `~/.config/pitwall/config.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PITWALL_SYNC__BASE_URL` -> `sync.base_url`,
//! `PITWALL_GENERAL__DATA_DIR` -> `general.data_dir`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pitwall_config::PitwallConfig;
//!
//! let config = PitwallConfig::load_with_dotenv().expect("config");
//! if config.sync.is_configured() {
//!     println!("sync server: {}", config.sync.base_url);
//! }
//! ```

mod error;
mod general;
mod sync;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sync::SyncConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PitwallConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl PitwallConfig {
    /// Load configuration from all sources (TOML file + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. The typical entry point
    /// for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                figment = figment.merge(Toml::file(user_path));
            }
        }

        figment.merge(Env::prefixed("PITWALL_").split("__"))
    }

    /// Path of the user-level config file, if a config directory exists on
    /// this platform.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pitwall").join("config.toml"))
    }
}
