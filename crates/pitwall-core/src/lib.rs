//! # pitwall-core
//!
//! Profile data model and merge core for Pitwall.
//!
//! This crate holds the pure domain logic shared by every other crate:
//! - Data point schema: static descriptor tables for team and team-in-match
//!   fields, walked generically by the merge engine and exporters
//! - Observable entity stores aggregated into [`Profile`], all firing one
//!   shared update callback
//! - Schedule-driven gap filling
//! - The deterministic multi-profile merge
//! - Part-level JSON (de)serialization of a profile

pub mod alliance;
pub mod datapoints;
pub mod error;
pub mod gaps;
pub mod merge;
pub mod parts;
pub mod profile;
pub mod schedule;

pub use alliance::Alliance;
pub use datapoints::{
    FieldKind, FieldValue, TEAM_DATA_POINTS, TIM_DATA_POINTS, TeamDataPoint, TeamEntry,
    TimDataPoint, TimEntry,
};
pub use error::{InvalidFieldValue, PartError};
pub use gaps::fill_gaps;
pub use merge::merge_profiles;
pub use parts::{ProfilePart, decode_parts, encode_parts};
pub use profile::{OnUpdate, Profile, ProfileSettings, TeamDataMap, TimDataMap};
pub use schedule::{Match, MatchSchedule, ScheduledTeam, teams_in_schedule};
