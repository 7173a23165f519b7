//! Pipeline input steps.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use pitwall_core::{Profile, ProfileSettings, decode_parts, fill_gaps};
use pitwall_remote::RemoteError;

use crate::context::OpContext;
use crate::error::OpError;

/// Where an input step reads its profile from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// An existing named profile.
    Profile { name: Option<String> },
    /// A zip archive on disk.
    Archive { path: Option<PathBuf> },
    /// A directory holding part files.
    Folder { path: Option<PathBuf> },
    /// The sync server's data for a username.
    Remote { username: Option<String> },
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile { name } => match name {
                Some(name) => write!(f, "from profile '{name}'"),
                None => f.write_str("from profile (unselected)"),
            },
            Self::Archive { path } => match path {
                Some(path) => write!(f, "from archive {}", path.display()),
                None => f.write_str("from archive (unselected)"),
            },
            Self::Folder { path } => match path {
                Some(path) => write!(f, "from folder {}", path.display()),
                None => f.write_str("from folder (unselected)"),
            },
            Self::Remote { username } => match username {
                Some(username) => write!(f, "from sync server as '{username}'"),
                None => f.write_str("from sync server (unselected)"),
            },
        }
    }
}

/// One input step: an opaque capability yielding a whole profile.
///
/// Steps carry a unique identity so per-step results can be keyed without
/// referencing positions.
#[derive(Debug, Clone)]
pub struct OperationInput {
    id: String,
    pub source: InputSource,
}

impl OperationInput {
    fn new(source: InputSource) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source,
        }
    }

    #[must_use]
    pub fn profile(name: Option<&str>) -> Self {
        Self::new(InputSource::Profile {
            name: name.map(str::to_owned),
        })
    }

    #[must_use]
    pub fn archive(path: Option<PathBuf>) -> Self {
        Self::new(InputSource::Archive { path })
    }

    #[must_use]
    pub fn folder(path: Option<PathBuf>) -> Self {
        Self::new(InputSource::Folder { path })
    }

    #[must_use]
    pub fn remote(username: Option<&str>) -> Self {
        Self::new(InputSource::Remote {
            username: username.map(str::to_owned),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check the step is fully configured without running it.
    ///
    /// # Errors
    ///
    /// Returns [`OpError::SourceUnselected`] when it is not.
    pub fn validate(&self) -> Result<(), OpError> {
        match &self.source {
            InputSource::Profile { name: None } => {
                Err(OpError::SourceUnselected { what: "profile" })
            }
            InputSource::Archive { path: None } => {
                Err(OpError::SourceUnselected { what: "archive file" })
            }
            InputSource::Folder { path: None } => {
                Err(OpError::SourceUnselected { what: "folder" })
            }
            InputSource::Remote { username: None } => {
                Err(OpError::SourceUnselected { what: "username" })
            }
            _ => Ok(()),
        }
    }

    /// Import the profile from this step's source.
    ///
    /// # Errors
    ///
    /// Returns [`OpError`] when the step is unconfigured or the source
    /// cannot be read or decoded.
    pub async fn import(&self, ctx: &OpContext) -> Result<Profile, OpError> {
        match &self.source {
            InputSource::Profile { name } => {
                let name = name
                    .as_deref()
                    .ok_or(OpError::SourceUnselected { what: "profile" })?;
                Ok(ctx.store.read(name, Arc::new(|| {}))?)
            }
            InputSource::Archive { path } => {
                let path = path
                    .as_ref()
                    .ok_or(OpError::SourceUnselected { what: "archive file" })?;
                let bytes = fs::read(path)?;
                let profile = pitwall_codec::unpack(&bytes, Arc::new(|| {}))?;
                fill_gaps(&profile);
                Ok(profile)
            }
            InputSource::Folder { path } => {
                let path = path
                    .as_ref()
                    .ok_or(OpError::SourceUnselected { what: "folder" })?;
                let mut files = BTreeMap::new();
                for entry in fs::read_dir(path)? {
                    let entry = entry?;
                    if !entry.file_type()?.is_file() {
                        continue;
                    }
                    let file_name = entry.file_name().to_string_lossy().into_owned();
                    files.insert(file_name, fs::read(entry.path())?);
                }
                let profile = decode_parts(&files, Arc::new(|| {}))?;
                fill_gaps(&profile);
                Ok(profile)
            }
            InputSource::Remote { username } => {
                let username = username
                    .as_deref()
                    .ok_or(OpError::SourceUnselected { what: "username" })?;
                let client = ctx.remote.as_ref().ok_or(RemoteError::NotConfigured)?;
                let data = client.fetch(username).await?;
                Ok(Profile::new(
                    ProfileSettings::default(),
                    pitwall_core::MatchSchedule::default(),
                    data.team_data,
                    data.tim_data,
                    Arc::new(|| {}),
                ))
            }
        }
    }
}
