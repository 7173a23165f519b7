//! Ready-made operations for the app's profile workflows.

use std::path::PathBuf;

use crate::input::OperationInput;
use crate::output::OperationOutput;
use crate::pipeline::ProfileOperation;

/// A preset wires inputs and outputs for one workflow. Input order encodes
/// merge priority: the profile that should win ties goes first.
#[derive(Debug, Clone)]
pub enum OperationPreset {
    /// Merge `other` into `current`; `current` wins ties and receives the
    /// result.
    MergeFrom { current: String, other: String },
    /// Merge `current` into `target`; `target` wins ties and receives the
    /// result.
    MergeInto { current: String, target: String },
    /// Copy a profile under a new name.
    Duplicate { source: String, new_name: String },
    /// Import a zip archive as a new profile.
    ImportArchive { path: PathBuf, new_name: String },
    /// Import a directory of part files as a new profile.
    ImportFolder { path: PathBuf, new_name: String },
    /// Export a profile as a timestamped zip archive.
    ExportArchive { source: String, dir: PathBuf },
    /// Export a profile's part files into a directory.
    ExportFolder { source: String, dir: PathBuf },
    /// Export a profile as spreadsheet sheets.
    ExportSpreadsheet { source: String, dir: PathBuf },
    /// Download a username's data from the sync server into a new profile.
    Pull { username: String, new_name: String },
    /// Upload a profile's data to the sync server.
    Push { source: String, username: String },
}

impl OperationPreset {
    /// Build the configured operation for this preset.
    #[must_use]
    pub fn build(self) -> ProfileOperation {
        match self {
            Self::MergeFrom { current, other } => ProfileOperation::new(
                vec![
                    OperationInput::profile(Some(&current)),
                    OperationInput::profile(Some(&other)),
                ],
                vec![OperationOutput::profile(Some(&current))],
            ),
            Self::MergeInto { current, target } => ProfileOperation::new(
                vec![
                    OperationInput::profile(Some(&target)),
                    OperationInput::profile(Some(&current)),
                ],
                vec![OperationOutput::profile(Some(&target))],
            ),
            Self::Duplicate { source, new_name } => ProfileOperation::new(
                vec![OperationInput::profile(Some(&source))],
                vec![OperationOutput::new_profile(Some(&new_name))],
            ),
            Self::ImportArchive { path, new_name } => ProfileOperation::new(
                vec![OperationInput::archive(Some(path))],
                vec![OperationOutput::new_profile(Some(&new_name))],
            ),
            Self::ImportFolder { path, new_name } => ProfileOperation::new(
                vec![OperationInput::folder(Some(path))],
                vec![OperationOutput::new_profile(Some(&new_name))],
            ),
            Self::ExportArchive { source, dir } => ProfileOperation::new(
                vec![OperationInput::profile(Some(&source))],
                vec![OperationOutput::archive(Some(dir))],
            ),
            Self::ExportFolder { source, dir } => ProfileOperation::new(
                vec![OperationInput::profile(Some(&source))],
                vec![OperationOutput::folder(Some(dir))],
            ),
            Self::ExportSpreadsheet { source, dir } => ProfileOperation::new(
                vec![OperationInput::profile(Some(&source))],
                vec![OperationOutput::spreadsheet(Some(dir))],
            ),
            Self::Pull { username, new_name } => ProfileOperation::new(
                vec![OperationInput::remote(Some(&username))],
                vec![OperationOutput::new_profile(Some(&new_name))],
            ),
            Self::Push { source, username } => ProfileOperation::new(
                vec![OperationInput::profile(Some(&source))],
                vec![OperationOutput::remote(Some(&username))],
            ),
        }
    }
}
