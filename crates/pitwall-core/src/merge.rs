//! Deterministic multi-profile merge.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::datapoints::{
    FieldKind, FieldValue, TEAM_DATA_POINTS, TIM_DATA_POINTS, TeamEntry, TimEntry,
};
use crate::profile::{Profile, ProfileSettings, TeamDataMap, TimDataMap};

/// Merge the given profiles into one. Profiles earlier in the slice win ties.
///
/// - Profile settings reset to defaults in the output, whatever the inputs
///   hold.
/// - The first non-empty match schedule is used verbatim; all others are
///   discarded.
/// - Team and team-in-match data merge field by field over the union of keys
///   present in any input:
///   - string fields: all non-default values joined with newlines, in input
///     order;
///   - integer, boolean, and dropdown fields: the first non-default value,
///     or the default if every value is default or missing.
///
/// The result is a pure function of the inputs and their order.
#[must_use]
pub fn merge_profiles(profiles: &[Profile]) -> Profile {
    let schedule = profiles
        .iter()
        .map(|profile| profile.schedule.get())
        .find(|schedule| !schedule.is_empty())
        .unwrap_or_default();

    let team_snapshots: Vec<TeamDataMap> =
        profiles.iter().map(|profile| profile.team_data.get()).collect();
    let tim_snapshots: Vec<TimDataMap> =
        profiles.iter().map(|profile| profile.tim_data.get()).collect();

    Profile::new(
        ProfileSettings::default(),
        schedule,
        merge_team_data(&team_snapshots),
        merge_tim_data(&tim_snapshots),
        Arc::new(|| {}),
    )
}

/// Combine one field's values, highest priority first. Values equal to the
/// kind's default are dropped before combining; absent entries never produce
/// a value in the first place, so both filter out identically.
fn merge_field(kind: FieldKind, values: Vec<FieldValue>) -> FieldValue {
    let default = kind.default_value();
    let mut survivors = values.into_iter().filter(|value| *value != default);
    match kind {
        FieldKind::Str => FieldValue::Str(
            survivors
                .filter_map(FieldValue::into_str)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        FieldKind::Int | FieldKind::Bool | FieldKind::Dropdown => {
            survivors.next().unwrap_or(default)
        }
    }
}

fn merge_team_data(snapshots: &[TeamDataMap]) -> TeamDataMap {
    let teams: BTreeSet<&String> = snapshots.iter().flat_map(BTreeMap::keys).collect();
    let mut merged = TeamDataMap::new();
    for team in teams {
        let mut entry = TeamEntry::default();
        for point in TEAM_DATA_POINTS {
            let values = snapshots
                .iter()
                .filter_map(|snapshot| snapshot.get(team))
                .map(|existing| (point.get)(existing))
                .collect();
            (point.set)(&mut entry, merge_field(point.kind, values));
        }
        merged.insert(team.clone(), entry);
    }
    merged
}

fn merge_tim_data(snapshots: &[TimDataMap]) -> TimDataMap {
    let matches: BTreeSet<&String> = snapshots.iter().flat_map(BTreeMap::keys).collect();
    let mut merged = TimDataMap::new();
    for match_number in matches {
        let teams: BTreeSet<&String> = snapshots
            .iter()
            .filter_map(|snapshot| snapshot.get(match_number))
            .flat_map(BTreeMap::keys)
            .collect();
        let mut match_map = BTreeMap::new();
        for team in teams {
            let mut entry = TimEntry::default();
            for point in TIM_DATA_POINTS {
                let values = snapshots
                    .iter()
                    .filter_map(|snapshot| snapshot.get(match_number))
                    .filter_map(|match_map| match_map.get(team))
                    .map(|existing| (point.get)(existing))
                    .collect();
                (point.set)(&mut entry, merge_field(point.kind, values));
            }
            match_map.insert(team.clone(), entry);
        }
        merged.insert(match_number.clone(), match_map);
    }
    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::first_non_default_int(
        FieldKind::Int,
        vec![FieldValue::Int(0), FieldValue::Int(3), FieldValue::Int(5)],
        FieldValue::Int(3)
    )]
    #[case::first_non_default_bool(
        FieldKind::Bool,
        vec![FieldValue::Bool(false), FieldValue::Bool(true)],
        FieldValue::Bool(true)
    )]
    #[case::all_default_int(FieldKind::Int, vec![FieldValue::Int(0)], FieldValue::Int(0))]
    #[case::dropdown_picks_first_not_joins(
        FieldKind::Dropdown,
        vec![FieldValue::Str("broken".into()), FieldValue::Str("slow".into())],
        FieldValue::Str("broken".into())
    )]
    #[case::strings_join_in_order(
        FieldKind::Str,
        vec![
            FieldValue::Str("x".into()),
            FieldValue::Str(String::new()),
            FieldValue::Str("y".into()),
        ],
        FieldValue::Str("x\ny".into())
    )]
    #[case::no_values(FieldKind::Str, vec![], FieldValue::Str(String::new()))]
    fn merge_field_rules(
        #[case] kind: FieldKind,
        #[case] values: Vec<FieldValue>,
        #[case] expected: FieldValue,
    ) {
        assert_eq!(merge_field(kind, values), expected);
    }

    #[test]
    fn key_union_spans_all_snapshots() {
        let mut a = TeamDataMap::new();
        a.insert("118".to_owned(), TeamEntry::default());
        let mut b = TeamDataMap::new();
        b.insert(
            "999".to_owned(),
            TeamEntry {
                strengths: "sturdy".to_owned(),
                ..TeamEntry::default()
            },
        );

        let merged = merge_team_data(&[a, b]);

        assert_eq!(merged.keys().cloned().collect::<Vec<_>>(), ["118", "999"]);
        assert_eq!(merged["999"].strengths, "sturdy");
    }
}
