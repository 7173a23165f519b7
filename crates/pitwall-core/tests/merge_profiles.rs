//! Merge scenarios over full profiles.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use pitwall_core::{
    Alliance, Match, MatchSchedule, Profile, ProfileSettings, ScheduledTeam, TeamDataMap,
    TeamEntry, TimDataMap, TimEntry, merge_profiles,
};

fn schedule_one_match(number: &str, teams: &[(&str, Alliance)]) -> MatchSchedule {
    let mut schedule = MatchSchedule::new();
    schedule.insert(
        number.to_owned(),
        Match {
            teams: teams
                .iter()
                .map(|(team, color)| ScheduledTeam {
                    color: *color,
                    number: (*team).to_owned(),
                })
                .collect(),
        },
    );
    schedule
}

fn profile_one() -> Profile {
    let schedule = schedule_one_match(
        "1",
        &[("12345", Alliance::Blue), ("56789", Alliance::Red)],
    );

    let mut team_data = TeamDataMap::new();
    team_data.insert(
        "12345".to_owned(),
        TeamEntry {
            strengths: "good driving".to_owned(),
            ..TeamEntry::default()
        },
    );
    team_data.insert(
        "56789".to_owned(),
        TeamEntry {
            weaknesses: "bad driving".to_owned(),
            ..TeamEntry::default()
        },
    );

    let mut tim_data = TimDataMap::new();
    let mut match_one = std::collections::BTreeMap::new();
    match_one.insert(
        "12345".to_owned(),
        TimEntry {
            played_defense: true,
            defense_rating: 3,
            ..TimEntry::default()
        },
    );
    match_one.insert(
        "56789".to_owned(),
        TimEntry {
            notes: "hello".to_owned(),
            broken_mechanism: "stuff".to_owned(),
            ..TimEntry::default()
        },
    );
    tim_data.insert("1".to_owned(), match_one);

    Profile::new(
        ProfileSettings::default(),
        schedule,
        team_data,
        tim_data,
        Arc::new(|| {}),
    )
}

fn profile_two() -> Profile {
    let schedule = schedule_one_match(
        "2",
        &[("56789", Alliance::Blue), ("12345", Alliance::Red)],
    );

    let mut team_data = TeamDataMap::new();
    team_data.insert(
        "12345".to_owned(),
        TeamEntry {
            strengths: "good robot".to_owned(),
            ..TeamEntry::default()
        },
    );

    let mut tim_data = TimDataMap::new();
    let mut match_one = std::collections::BTreeMap::new();
    match_one.insert(
        "12345".to_owned(),
        TimEntry {
            played_defense: true,
            defense_rating: 5,
            notes: "hello".to_owned(),
            broken_mechanism: "stuff".to_owned(),
            ..TimEntry::default()
        },
    );
    tim_data.insert("1".to_owned(), match_one);
    let mut match_two = std::collections::BTreeMap::new();
    match_two.insert(
        "12345".to_owned(),
        TimEntry {
            notes: "hello".to_owned(),
            broken_mechanism: "stuff".to_owned(),
            ..TimEntry::default()
        },
    );
    tim_data.insert("2".to_owned(), match_two);

    Profile::new(
        ProfileSettings::default(),
        schedule,
        team_data,
        tim_data,
        Arc::new(|| {}),
    )
}

#[test]
fn single_profile_merges_to_itself() {
    let original = profile_one();
    let merged = merge_profiles(&[profile_one()]);

    assert_eq!(merged.schedule.get(), original.schedule.get());
    assert_eq!(merged.team_data.get(), original.team_data.get());
    assert_eq!(merged.tim_data.get(), original.tim_data.get());
}

#[test]
fn settings_always_reset_to_defaults() {
    let profile = profile_one();
    profile.settings.set(ProfileSettings {
        alliance: Some(Alliance::Red),
        match_number: "7".to_owned(),
        page: 3,
    });

    let merged = merge_profiles(&[profile]);

    assert_eq!(merged.settings.get(), ProfileSettings::default());
}

#[test]
fn two_profiles_join_strings_and_keep_first_scalars() {
    let merged = merge_profiles(&[profile_one(), profile_two()]);

    // Schedule comes verbatim from the first non-empty input.
    let schedule = merged.schedule.get();
    assert_eq!(schedule.keys().cloned().collect::<Vec<_>>(), ["1"]);
    assert_eq!(
        schedule["1"].teams,
        vec![
            ScheduledTeam {
                color: Alliance::Blue,
                number: "12345".to_owned()
            },
            ScheduledTeam {
                color: Alliance::Red,
                number: "56789".to_owned()
            },
        ]
    );

    let team_data = merged.team_data.get();
    assert_eq!(
        team_data["12345"],
        TeamEntry {
            strengths: "good driving\ngood robot".to_owned(),
            ..TeamEntry::default()
        }
    );
    assert_eq!(
        team_data["56789"],
        TeamEntry {
            weaknesses: "bad driving".to_owned(),
            ..TeamEntry::default()
        }
    );

    let tim_data = merged.tim_data.get();
    assert_eq!(tim_data.keys().cloned().collect::<Vec<_>>(), ["1", "2"]);
    // Rating 3 from the first profile wins over 5 from the second.
    assert_eq!(
        tim_data["1"]["12345"],
        TimEntry {
            played_defense: true,
            defense_rating: 3,
            notes: "hello".to_owned(),
            broken_mechanism: "stuff".to_owned(),
            ..TimEntry::default()
        }
    );
    assert_eq!(
        tim_data["1"]["56789"],
        TimEntry {
            notes: "hello".to_owned(),
            broken_mechanism: "stuff".to_owned(),
            ..TimEntry::default()
        }
    );
    assert_eq!(
        tim_data["2"]["12345"],
        TimEntry {
            notes: "hello".to_owned(),
            broken_mechanism: "stuff".to_owned(),
            ..TimEntry::default()
        }
    );
}

#[test]
fn scalar_ties_are_order_sensitive() {
    let forward = merge_profiles(&[profile_one(), profile_two()]);
    let reverse = merge_profiles(&[profile_two(), profile_one()]);

    assert_eq!(forward.tim_data.get()["1"]["12345"].defense_rating, 3);
    assert_eq!(reverse.tim_data.get()["1"]["12345"].defense_rating, 5);
    assert_eq!(
        reverse.team_data.get()["12345"].strengths,
        "good robot\ngood driving"
    );
}

#[test]
fn empty_profile_is_overridden() {
    let merged = merge_profiles(&[Profile::empty(), profile_one()]);
    let original = profile_one();

    assert_eq!(merged.schedule.get(), original.schedule.get());
    assert_eq!(merged.team_data.get(), original.team_data.get());
    assert_eq!(merged.tim_data.get(), original.tim_data.get());
}

#[test]
fn teams_known_to_only_one_profile_survive() {
    let lone = Profile::empty();
    let mut team_data = TeamDataMap::new();
    team_data.insert("999".to_owned(), TeamEntry::default());
    lone.team_data.replace(team_data);

    let merged = merge_profiles(&[profile_one(), lone]);

    assert!(merged.team_data.get().contains_key("999"));
}

#[test]
fn default_strings_never_join() {
    let a = Profile::empty();
    let mut data = TeamDataMap::new();
    data.insert(
        "1".to_owned(),
        TeamEntry {
            strengths: "x".to_owned(),
            ..TeamEntry::default()
        },
    );
    a.team_data.replace(data);

    let b = Profile::empty();
    let mut data = TeamDataMap::new();
    data.insert(
        "1".to_owned(),
        TeamEntry {
            strengths: "y".to_owned(),
            ..TeamEntry::default()
        },
    );
    b.team_data.replace(data);

    let c = Profile::empty();
    let mut data = TeamDataMap::new();
    data.insert("1".to_owned(), TeamEntry::default());
    c.team_data.replace(data);

    let merged = merge_profiles(&[a, b, c]);
    assert_eq!(merged.team_data.get()["1"].strengths, "x\ny");
}
