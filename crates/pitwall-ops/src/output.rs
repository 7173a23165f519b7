//! Pipeline output steps.

use std::fs;
use std::path::PathBuf;
use std::sync::PoisonError;

use pitwall_core::{Profile, encode_parts};
use pitwall_remote::{RemoteData, RemoteError};

use crate::context::OpContext;
use crate::error::OpError;

/// Where an output step writes the merged profile.
#[derive(Debug, Clone)]
pub enum OutputSink {
    /// Overwrite an existing named profile.
    Profile { name: Option<String> },
    /// Create and register a new named profile.
    NewProfile { name: Option<String> },
    /// A timestamped zip archive inside a directory.
    Archive { dir: Option<PathBuf> },
    /// Loose part files inside a directory.
    Folder { dir: Option<PathBuf> },
    /// Timestamped spreadsheet sheets inside a directory.
    Spreadsheet { dir: Option<PathBuf> },
    /// The sync server, keyed by username.
    Remote { username: Option<String> },
}

impl std::fmt::Display for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile { name } => match name {
                Some(name) => write!(f, "to profile '{name}'"),
                None => f.write_str("to profile (unselected)"),
            },
            Self::NewProfile { name } => match name {
                Some(name) => write!(f, "to new profile '{name}'"),
                None => f.write_str("to new profile (unnamed)"),
            },
            Self::Archive { dir } => match dir {
                Some(dir) => write!(f, "to archive in {}", dir.display()),
                None => f.write_str("to archive (unselected)"),
            },
            Self::Folder { dir } => match dir {
                Some(dir) => write!(f, "to folder {}", dir.display()),
                None => f.write_str("to folder (unselected)"),
            },
            Self::Spreadsheet { dir } => match dir {
                Some(dir) => write!(f, "to spreadsheet in {}", dir.display()),
                None => f.write_str("to spreadsheet (unselected)"),
            },
            Self::Remote { username } => match username {
                Some(username) => write!(f, "to sync server as '{username}'"),
                None => f.write_str("to sync server (unselected)"),
            },
        }
    }
}

/// One output step: an independent fan-out sink for the merged profile.
#[derive(Debug, Clone)]
pub struct OperationOutput {
    id: String,
    pub sink: OutputSink,
}

impl OperationOutput {
    fn new(sink: OutputSink) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sink,
        }
    }

    #[must_use]
    pub fn profile(name: Option<&str>) -> Self {
        Self::new(OutputSink::Profile {
            name: name.map(str::to_owned),
        })
    }

    #[must_use]
    pub fn new_profile(name: Option<&str>) -> Self {
        Self::new(OutputSink::NewProfile {
            name: name.map(str::to_owned),
        })
    }

    #[must_use]
    pub fn archive(dir: Option<PathBuf>) -> Self {
        Self::new(OutputSink::Archive { dir })
    }

    #[must_use]
    pub fn folder(dir: Option<PathBuf>) -> Self {
        Self::new(OutputSink::Folder { dir })
    }

    #[must_use]
    pub fn spreadsheet(dir: Option<PathBuf>) -> Self {
        Self::new(OutputSink::Spreadsheet { dir })
    }

    #[must_use]
    pub fn remote(username: Option<&str>) -> Self {
        Self::new(OutputSink::Remote {
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
        match &self.sink {
            OutputSink::Profile { name: None } => {
                Err(OpError::SourceUnselected { what: "target profile" })
            }
            OutputSink::NewProfile { name: None } => Err(OpError::EmptyName),
            OutputSink::Archive { dir: None }
            | OutputSink::Folder { dir: None }
            | OutputSink::Spreadsheet { dir: None } => {
                Err(OpError::SourceUnselected { what: "export folder" })
            }
            OutputSink::Remote { username: None } => {
                Err(OpError::SourceUnselected { what: "username" })
            }
            _ => Ok(()),
        }
    }

    /// Export the merged profile to this step's sink.
    ///
    /// # Errors
    ///
    /// Returns [`OpError`] when the step is unconfigured, the target must
    /// not be overwritten, or the write fails.
    pub async fn export(&self, profile: &Profile, ctx: &OpContext) -> Result<(), OpError> {
        match &self.sink {
            OutputSink::Profile { name } => {
                let name = name
                    .as_deref()
                    .ok_or(OpError::SourceUnselected { what: "target profile" })?;
                if ctx.loaded_profile.as_deref() == Some(name) {
                    return Err(OpError::Conflict(format!(
                        "can't overwrite the currently loaded profile '{name}'"
                    )));
                }
                ctx.store.write(name, profile)?;
                Ok(())
            }
            OutputSink::NewProfile { name } => {
                let name = name.as_deref().filter(|name| !name.is_empty());
                let name = name.ok_or(OpError::EmptyName)?;
                let registered = {
                    let registry = ctx
                        .registry
                        .read()
                        .unwrap_or_else(PoisonError::into_inner);
                    registry.contains(name)
                };
                if registered {
                    return Err(OpError::Conflict(format!("profile '{name}' already exists")));
                }
                ctx.store.create(name)?;
                ctx.store.write(name, profile)?;
                ctx.registry
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .add_profile(name)?;
                Ok(())
            }
            OutputSink::Archive { dir } => {
                let dir = dir
                    .as_ref()
                    .ok_or(OpError::SourceUnselected { what: "export folder" })?;
                fs::create_dir_all(dir)?;
                let bytes = pitwall_codec::pack(profile)?;
                let stamp = chrono::Utc::now().timestamp_millis();
                fs::write(dir.join(format!("{stamp}.pitwall.zip")), bytes)?;
                Ok(())
            }
            OutputSink::Folder { dir } => {
                let dir = dir
                    .as_ref()
                    .ok_or(OpError::SourceUnselected { what: "export folder" })?;
                fs::create_dir_all(dir)?;
                for (part, bytes) in encode_parts(profile)? {
                    fs::write(dir.join(part.file_name()), bytes)?;
                }
                Ok(())
            }
            OutputSink::Spreadsheet { dir } => {
                let dir = dir
                    .as_ref()
                    .ok_or(OpError::SourceUnselected { what: "export folder" })?;
                fs::create_dir_all(dir)?;
                let stamp = chrono::Utc::now().timestamp_millis();
                fs::write(
                    dir.join(format!("{stamp}.team_data.csv")),
                    pitwall_codec::team_sheet_csv(profile)?,
                )?;
                fs::write(
                    dir.join(format!("{stamp}.tim_data.csv")),
                    pitwall_codec::tim_sheet_csv(profile)?,
                )?;
                Ok(())
            }
            OutputSink::Remote { username } => {
                let username = username
                    .as_deref()
                    .ok_or(OpError::SourceUnselected { what: "username" })?;
                let client = ctx.remote.as_ref().ok_or(RemoteError::NotConfigured)?;
                let data = RemoteData {
                    team_data: profile.team_data.get(),
                    tim_data: profile.tim_data.get(),
                };
                client.push(username, &data).await?;
                Ok(())
            }
        }
    }
}
