//! Schedule-driven gap filling.

use crate::profile::Profile;
use crate::schedule::teams_in_schedule;

/// Ensure every team and every match+team implied by the schedule has a
/// (possibly default) data entry.
///
/// Existing entries are never removed or altered. Fires the profile's update
/// callback once per store. Idempotent. Run after every import, before the
/// profile is handed out.
pub fn fill_gaps(profile: &Profile) {
    let schedule = profile.schedule.get();

    let mut team_data = profile.team_data.get();
    for team in teams_in_schedule(&schedule) {
        team_data.entry(team).or_default();
    }
    profile.team_data.replace(team_data);

    let mut tim_data = profile.tim_data.get();
    for (match_number, scheduled) in &schedule {
        let teams = tim_data.entry(match_number.clone()).or_default();
        for team in &scheduled.teams {
            teams.entry(team.number.clone()).or_default();
        }
    }
    profile.tim_data.replace(tim_data);
}
