//! Reading and writing profile directories.

use std::collections::BTreeMap;
use std::fs;

use pitwall_core::{OnUpdate, Profile, decode_parts, encode_parts, fill_gaps};

use crate::error::StoreError;
use crate::paths::DataPaths;

/// Storage collaborator for profile part files.
///
/// Parts are independent: a profile directory missing some part files still
/// reads (missing parts become defaults), so partially written profiles are
/// tolerated. Single-writer per profile at a time; see
/// [`crate::lock::ProfileLock`].
#[derive(Debug, Clone)]
pub struct ProfileStore {
    paths: DataPaths,
}

impl ProfileStore {
    #[must_use]
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    #[must_use]
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Read a profile from its directory and fill schedule gaps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the directory does not exist and
    /// [`StoreError::Part`] when a present part file is malformed.
    pub fn read(&self, name: &str, on_update: OnUpdate) -> Result<Profile, StoreError> {
        let dir = self.paths.profile_dir(name);
        if !dir.is_dir() {
            return Err(StoreError::NotFound {
                name: name.to_owned(),
            });
        }

        let mut files = BTreeMap::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            files.insert(file_name, fs::read(entry.path())?);
        }

        let profile = decode_parts(&files, on_update)?;
        fill_gaps(&profile);
        tracing::debug!(profile = name, "loaded profile");
        Ok(profile)
    }

    /// Write all four part files of a profile, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when encoding or writing fails.
    pub fn write(&self, name: &str, profile: &Profile) -> Result<(), StoreError> {
        let dir = self.paths.profile_dir(name);
        fs::create_dir_all(&dir)?;
        for (part, bytes) in encode_parts(profile)? {
            fs::write(dir.join(part.file_name()), bytes)?;
        }
        tracing::debug!(profile = name, "wrote profile");
        Ok(())
    }

    /// Create a new, empty profile directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] for names the filesystem cannot
    /// hold and [`StoreError::Conflict`] when the directory already exists.
    pub fn create(&self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        if self.paths.profile_dir(name).exists() {
            return Err(StoreError::Conflict {
                name: name.to_owned(),
            });
        }
        self.write(name, &Profile::empty())
    }

    /// Rename a profile directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the source is missing and
    /// [`StoreError::Conflict`] when the target already exists.
    pub fn rename(&self, old: &str, new: &str) -> Result<(), StoreError> {
        validate_name(new)?;
        let source = self.paths.profile_dir(old);
        if !source.is_dir() {
            return Err(StoreError::NotFound {
                name: old.to_owned(),
            });
        }
        let target = self.paths.profile_dir(new);
        if target.exists() {
            return Err(StoreError::Conflict {
                name: new.to_owned(),
            });
        }
        fs::rename(source, target)?;
        Ok(())
    }

    /// Move a profile directory into the trash rather than deleting it
    /// outright.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the profile is missing.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let source = self.paths.profile_dir(name);
        if !source.is_dir() {
            return Err(StoreError::NotFound {
                name: name.to_owned(),
            });
        }
        let trash = self.paths.trash_dir();
        fs::create_dir_all(&trash)?;
        let stamp = chrono::Utc::now().timestamp_millis();
        fs::rename(source, trash.join(format!("{name}-{stamp}")))?;
        tracing::debug!(profile = name, "moved profile to trash");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(StoreError::InvalidName {
            name: name.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pitwall_core::{ProfilePart, TeamEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> (tempfile::TempDir, ProfileStore) {
        let temp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(DataPaths::new(temp.path()));
        (temp, store)
    }

    #[test]
    fn write_then_read_round_trips() {
        let (_temp, store) = store();
        let profile = Profile::empty();
        let mut team_data = profile.team_data.get();
        team_data.insert(
            "118".to_owned(),
            TeamEntry {
                team_notes: "swerve".to_owned(),
                ..TeamEntry::default()
            },
        );
        profile.team_data.replace(team_data);

        store.write("quals", &profile).unwrap();
        let loaded = store.read("quals", Arc::new(|| {})).unwrap();

        assert_eq!(loaded.team_data.get()["118"].team_notes, "swerve");
    }

    #[test]
    fn missing_part_file_reads_as_defaults() {
        let (_temp, store) = store();
        store.write("quals", &Profile::empty()).unwrap();
        fs::remove_file(store.paths().part_file("quals", ProfilePart::TeamData)).unwrap();

        let loaded = store.read("quals", Arc::new(|| {})).unwrap();
        assert!(loaded.team_data.get().is_empty());
    }

    #[test]
    fn read_of_unknown_profile_is_not_found() {
        let (_temp, store) = store();
        let err = store.read("nope", Arc::new(|| {})).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn create_refuses_existing_profile() {
        let (_temp, store) = store();
        store.create("quals").unwrap();
        let err = store.create("quals").unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[test]
    fn create_refuses_path_like_names() {
        let (_temp, store) = store();
        assert!(matches!(
            store.create("../escape").unwrap_err(),
            StoreError::InvalidName { .. }
        ));
        assert!(matches!(
            store.create("").unwrap_err(),
            StoreError::InvalidName { .. }
        ));
    }

    #[test]
    fn rename_moves_the_directory() {
        let (_temp, store) = store();
        store.create("day1").unwrap();

        store.rename("day1", "friday").unwrap();

        assert!(store.paths().profile_dir("friday").is_dir());
        assert!(!store.paths().profile_dir("day1").exists());
    }

    #[test]
    fn rename_refuses_existing_target() {
        let (_temp, store) = store();
        store.create("day1").unwrap();
        store.create("day2").unwrap();
        let err = store.rename("day1", "day2").unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[test]
    fn delete_moves_to_trash() {
        let (_temp, store) = store();
        store.create("scrap").unwrap();

        store.delete("scrap").unwrap();

        assert!(!store.paths().profile_dir("scrap").exists());
        let trashed: Vec<_> = fs::read_dir(store.paths().trash_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(trashed.len(), 1);
        assert!(trashed[0].starts_with("scrap-"));
    }
}
