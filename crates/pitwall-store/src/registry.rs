//! The app-wide profile registry.
//!
//! One instance per process: the list of known profile names and which one
//! is current. Loaded once at startup; every change is persisted immediately
//! and synchronously (the document is tiny and changes are rare), unlike
//! profile data which goes through the debounced autosave.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The persisted registry document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub current_profile: Option<String>,
    #[serde(default)]
    pub profiles: Vec<String>,
}

/// Process-wide registry of profile names, backed by one JSON document.
#[derive(Debug)]
pub struct AppRegistry {
    path: PathBuf,
    settings: RegistrySettings,
}

impl AppRegistry {
    /// Load the registry, or start empty when the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the document exists but cannot be read or
    /// parsed.
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            serde_json::from_slice(&fs::read(&path)?)?
        } else {
            RegistrySettings::default()
        };
        Ok(Self { path, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    #[must_use]
    pub fn current_profile(&self) -> Option<&str> {
        self.settings.current_profile.as_deref()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.settings.profiles.iter().any(|profile| profile == name)
    }

    /// Replace the registry state and persist it immediately.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the document cannot be written.
    pub fn update(&mut self, settings: RegistrySettings) -> Result<(), StoreError> {
        self.settings = settings;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(&self.settings)?)?;
        Ok(())
    }

    /// Register a new profile name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persisting fails.
    pub fn add_profile(&mut self, name: &str) -> Result<(), StoreError> {
        let mut settings = self.settings.clone();
        settings.profiles.push(name.to_owned());
        self.update(settings)
    }

    /// Drop a profile name, clearing the current pointer if it matched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persisting fails.
    pub fn remove_profile(&mut self, name: &str) -> Result<(), StoreError> {
        let mut settings = self.settings.clone();
        settings.profiles.retain(|profile| profile != name);
        if settings.current_profile.as_deref() == Some(name) {
            settings.current_profile = None;
        }
        self.update(settings)
    }

    /// Rename a profile in place, following the current pointer if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persisting fails.
    pub fn rename_profile(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        let mut settings = self.settings.clone();
        for profile in &mut settings.profiles {
            if profile == old {
                *profile = new.to_owned();
            }
        }
        if settings.current_profile.as_deref() == Some(old) {
            settings.current_profile = Some(new.to_owned());
        }
        self.update(settings)
    }

    /// Point the registry at a different current profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persisting fails.
    pub fn set_current(&mut self, name: Option<&str>) -> Result<(), StoreError> {
        let mut settings = self.settings.clone();
        settings.current_profile = name.map(str::to_owned);
        self.update(settings)
    }
}
