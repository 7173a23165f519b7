//! Paths to files used by the app.

use std::path::{Path, PathBuf};

use pitwall_core::ProfilePart;

/// File name of the app-wide registry document.
const REGISTRY_FILE: &str = "settings.json";

/// Layout of the on-disk data directory:
///
/// ```text
/// <root>/
///   settings.json            app-wide registry
///   profiles/<name>/         one directory per profile, four part files
///   trash/                   deleted profiles
/// ```
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The app-wide registry document.
    #[must_use]
    pub fn registry_file(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    /// The folder containing all profiles named in the registry.
    #[must_use]
    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    /// The folder for one profile.
    #[must_use]
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(name)
    }

    /// One part file of one profile.
    #[must_use]
    pub fn part_file(&self, name: &str, part: ProfilePart) -> PathBuf {
        self.profile_dir(name).join(part.file_name())
    }

    /// The per-profile write lock file.
    #[must_use]
    pub fn lock_file(&self, name: &str) -> PathBuf {
        self.profile_dir(name).join(".write.lock")
    }

    /// Where deleted profiles are moved.
    #[must_use]
    pub fn trash_dir(&self) -> PathBuf {
        self.root.join("trash")
    }
}
