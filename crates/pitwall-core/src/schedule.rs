//! Match schedule types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::alliance::Alliance;

/// Schedule keyed by match number.
pub type MatchSchedule = BTreeMap<String, Match>;

/// One scheduled match. Six team slots by convention (three blue, then three
/// red); the shape is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub teams: Vec<ScheduledTeam>,
}

/// One team slot in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTeam {
    pub color: Alliance,
    pub number: String,
}

/// Every team number referenced anywhere in the schedule, de-duplicated.
#[must_use]
pub fn teams_in_schedule(schedule: &MatchSchedule) -> Vec<String> {
    let teams: BTreeSet<&str> = schedule
        .values()
        .flat_map(|m| m.teams.iter().map(|team| team.number.as_str()))
        .collect();
    teams.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_of(numbers: &[&str]) -> Match {
        Match {
            teams: numbers
                .iter()
                .map(|number| ScheduledTeam {
                    color: Alliance::Blue,
                    number: (*number).to_owned(),
                })
                .collect(),
        }
    }

    #[test]
    fn collects_teams_across_matches_without_duplicates() {
        let schedule: MatchSchedule = [
            ("1".to_owned(), match_of(&["118", "254", "971"])),
            ("2".to_owned(), match_of(&["254", "1678"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(teams_in_schedule(&schedule), ["118", "1678", "254", "971"]);
    }

    #[test]
    fn empty_schedule_has_no_teams() {
        assert!(teams_in_schedule(&MatchSchedule::new()).is_empty());
    }
}
