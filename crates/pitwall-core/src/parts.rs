//! Part-level (de)serialization of a profile.
//!
//! A profile persists as four independent JSON documents ("parts"). Parts
//! are written and read independently, so a partially written profile stays
//! loadable: a missing part decodes to its defaults. Malformed bytes are
//! rejected here, at decode time, rather than surfacing downstream.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PartError;
use crate::profile::{OnUpdate, Profile, ProfileSettings, TeamDataMap, TimDataMap};
use crate::schedule::MatchSchedule;

/// One of the four persisted documents making up a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePart {
    Settings,
    MatchSchedule,
    TeamData,
    TimData,
}

impl ProfilePart {
    pub const ALL: [Self; 4] = [
        Self::Settings,
        Self::MatchSchedule,
        Self::TeamData,
        Self::TimData,
    ];

    /// File name of this part inside a profile directory or archive.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Settings => "settings.json",
            Self::MatchSchedule => "match_schedule.json",
            Self::TeamData => "team_data.json",
            Self::TimData => "tim_data.json",
        }
    }
}

/// Decode a profile from a map of part file names to raw bytes.
///
/// Unknown file names are ignored; missing parts decode to defaults.
///
/// # Errors
///
/// Returns [`PartError::Decode`] when a present part is malformed.
pub fn decode_parts(
    files: &BTreeMap<String, Vec<u8>>,
    on_update: OnUpdate,
) -> Result<Profile, PartError> {
    let settings: ProfileSettings = decode_part(files, ProfilePart::Settings)?;
    let schedule: MatchSchedule = decode_part(files, ProfilePart::MatchSchedule)?;
    let team_data: TeamDataMap = decode_part(files, ProfilePart::TeamData)?;
    let tim_data: TimDataMap = decode_part(files, ProfilePart::TimData)?;
    Ok(Profile::new(settings, schedule, team_data, tim_data, on_update))
}

fn decode_part<T: Default + DeserializeOwned>(
    files: &BTreeMap<String, Vec<u8>>,
    part: ProfilePart,
) -> Result<T, PartError> {
    files.get(part.file_name()).map_or_else(
        || Ok(T::default()),
        |bytes| {
            serde_json::from_slice(bytes).map_err(|source| PartError::Decode {
                part: part.file_name(),
                source,
            })
        },
    )
}

/// Encode a profile into its four parts, in [`ProfilePart::ALL`] order.
///
/// # Errors
///
/// Returns [`PartError::Encode`] when serialization fails.
pub fn encode_parts(profile: &Profile) -> Result<Vec<(ProfilePart, Vec<u8>)>, PartError> {
    Ok(vec![
        (
            ProfilePart::Settings,
            encode_part(ProfilePart::Settings, &profile.settings.get())?,
        ),
        (
            ProfilePart::MatchSchedule,
            encode_part(ProfilePart::MatchSchedule, &profile.schedule.get())?,
        ),
        (
            ProfilePart::TeamData,
            encode_part(ProfilePart::TeamData, &profile.team_data.get())?,
        ),
        (
            ProfilePart::TimData,
            encode_part(ProfilePart::TimData, &profile.tim_data.get())?,
        ),
    ])
}

fn encode_part<T: Serialize>(part: ProfilePart, value: &T) -> Result<Vec<u8>, PartError> {
    serde_json::to_vec(value).map_err(|source| PartError::Encode {
        part: part.file_name(),
        source,
    })
}
