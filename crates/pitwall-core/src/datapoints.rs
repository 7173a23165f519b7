//! Data point schema for team and team-in-match records.
//!
//! The schema is a pair of static, ordered descriptor tables shared
//! process-wide and read-only after startup. Each descriptor names one scalar
//! field, carries its kind, and reads/writes the field through plain function
//! pointers so generic code (the merge engine, the spreadsheet renderer, the
//! CLI edit commands) can walk whole records without naming individual
//! fields.

use serde::{Deserialize, Serialize};

use crate::error::InvalidFieldValue;

/// Scalar kinds a data point can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Bool,
    /// Enumerated string selected from a fixed option list. Merges like a
    /// boolean (first non-default wins), not like free text.
    Dropdown,
}

impl FieldKind {
    /// Lowercase kind name for messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Bool => "boolean",
            Self::Dropdown => "dropdown",
        }
    }

    /// The type default for this kind (`""`, `0`, or `false`).
    #[must_use]
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::Str | Self::Dropdown => FieldValue::Str(String::new()),
            Self::Int => FieldValue::Int(0),
            Self::Bool => FieldValue::Bool(false),
        }
    }

    /// Parse a raw string into a value of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldValue`] when the raw string does not parse as
    /// the kind (non-numeric integer, non-`true`/`false` boolean).
    pub fn parse(self, raw: &str) -> Result<FieldValue, InvalidFieldValue> {
        match self {
            Self::Str | Self::Dropdown => Ok(FieldValue::Str(raw.to_owned())),
            Self::Int => raw
                .parse()
                .map(FieldValue::Int)
                .map_err(|_| InvalidFieldValue {
                    kind: self.name(),
                    raw: raw.to_owned(),
                }),
            Self::Bool => raw
                .parse()
                .map(FieldValue::Bool)
                .map_err(|_| InvalidFieldValue {
                    kind: self.name(),
                    raw: raw.to_owned(),
                }),
        }
    }
}

/// A scalar value read from or written to a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl FieldValue {
    /// The inner string, if this is a string value.
    #[must_use]
    pub fn into_str(self) -> Option<String> {
        match self {
            Self::Str(value) => Some(value),
            Self::Int(_) | Self::Bool(_) => None,
        }
    }

    /// Render the value as a table cell.
    #[must_use]
    pub fn to_cell(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

/// One record of team-level observations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    #[serde(default)]
    pub can_intake_ground: bool,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub weaknesses: String,
    #[serde(default)]
    pub team_notes: String,
}

/// One record of observations for a team in one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimEntry {
    #[serde(default, rename = "tim_auto_strategies")]
    pub auto_strategies: String,
    #[serde(default)]
    pub played_defense: bool,
    /// 0 (none) through 5.
    #[serde(default)]
    pub defense_rating: i64,
    #[serde(default)]
    pub defense_timestamp: String,
    #[serde(default)]
    pub played_against_defense: bool,
    #[serde(default)]
    pub broken_mechanism: String,
    #[serde(default, rename = "tim_notes")]
    pub notes: String,
}

/// Describes one named, typed field of a [`TeamEntry`].
pub struct TeamDataPoint {
    /// Stable field name, matching the serialized form.
    pub name: &'static str,
    /// Human-readable column label for tabular output.
    pub label: &'static str,
    pub kind: FieldKind,
    pub get: fn(&TeamEntry) -> FieldValue,
    pub set: fn(&mut TeamEntry, FieldValue),
}

/// Describes one named, typed field of a [`TimEntry`].
pub struct TimDataPoint {
    /// Stable field name, matching the serialized form.
    pub name: &'static str,
    /// Human-readable column label for tabular output.
    pub label: &'static str,
    pub kind: FieldKind,
    pub get: fn(&TimEntry) -> FieldValue,
    pub set: fn(&mut TimEntry, FieldValue),
}

/// The team-level data points, in display order.
pub static TEAM_DATA_POINTS: &[TeamDataPoint] = &[
    TeamDataPoint {
        name: "can_intake_ground",
        label: "Can Intake Ground",
        kind: FieldKind::Bool,
        get: |entry: &TeamEntry| FieldValue::Bool(entry.can_intake_ground),
        set: |entry: &mut TeamEntry, value: FieldValue| {
            if let FieldValue::Bool(flag) = value {
                entry.can_intake_ground = flag;
            }
        },
    },
    TeamDataPoint {
        name: "strengths",
        label: "Strengths",
        kind: FieldKind::Str,
        get: |entry: &TeamEntry| FieldValue::Str(entry.strengths.clone()),
        set: |entry: &mut TeamEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.strengths = text;
            }
        },
    },
    TeamDataPoint {
        name: "weaknesses",
        label: "Weaknesses",
        kind: FieldKind::Str,
        get: |entry: &TeamEntry| FieldValue::Str(entry.weaknesses.clone()),
        set: |entry: &mut TeamEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.weaknesses = text;
            }
        },
    },
    TeamDataPoint {
        name: "team_notes",
        label: "Team Notes",
        kind: FieldKind::Str,
        get: |entry: &TeamEntry| FieldValue::Str(entry.team_notes.clone()),
        set: |entry: &mut TeamEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.team_notes = text;
            }
        },
    },
];

/// The team-in-match data points, in display order.
pub static TIM_DATA_POINTS: &[TimDataPoint] = &[
    TimDataPoint {
        name: "tim_auto_strategies",
        label: "Auto Strategies",
        kind: FieldKind::Str,
        get: |entry: &TimEntry| FieldValue::Str(entry.auto_strategies.clone()),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.auto_strategies = text;
            }
        },
    },
    TimDataPoint {
        name: "played_defense",
        label: "Played Defense",
        kind: FieldKind::Bool,
        get: |entry: &TimEntry| FieldValue::Bool(entry.played_defense),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Bool(flag) = value {
                entry.played_defense = flag;
            }
        },
    },
    TimDataPoint {
        name: "defense_rating",
        label: "Defense Rating",
        kind: FieldKind::Int,
        get: |entry: &TimEntry| FieldValue::Int(entry.defense_rating),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Int(rating) = value {
                entry.defense_rating = rating;
            }
        },
    },
    TimDataPoint {
        name: "defense_timestamp",
        label: "Defense Timestamp",
        kind: FieldKind::Str,
        get: |entry: &TimEntry| FieldValue::Str(entry.defense_timestamp.clone()),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.defense_timestamp = text;
            }
        },
    },
    TimDataPoint {
        name: "played_against_defense",
        label: "Played Against Defense",
        kind: FieldKind::Bool,
        get: |entry: &TimEntry| FieldValue::Bool(entry.played_against_defense),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Bool(flag) = value {
                entry.played_against_defense = flag;
            }
        },
    },
    TimDataPoint {
        name: "broken_mechanism",
        label: "Broken Mechanism",
        kind: FieldKind::Str,
        get: |entry: &TimEntry| FieldValue::Str(entry.broken_mechanism.clone()),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.broken_mechanism = text;
            }
        },
    },
    TimDataPoint {
        name: "tim_notes",
        label: "Match Notes",
        kind: FieldKind::Str,
        get: |entry: &TimEntry| FieldValue::Str(entry.notes.clone()),
        set: |entry: &mut TimEntry, value: FieldValue| {
            if let FieldValue::Str(text) = value {
                entry.notes = text;
            }
        },
    },
];

/// Look up a team data point by its stable field name.
#[must_use]
pub fn team_data_point(name: &str) -> Option<&'static TeamDataPoint> {
    TEAM_DATA_POINTS.iter().find(|point| point.name == name)
}

/// Look up a team-in-match data point by its stable field name.
#[must_use]
pub fn tim_data_point(name: &str) -> Option<&'static TimDataPoint> {
    TIM_DATA_POINTS.iter().find(|point| point.name == name)
}
