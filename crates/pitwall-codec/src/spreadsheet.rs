//! Spreadsheet sheet rendering.
//!
//! Renders the team and team-in-match tables as CSV sheets for spreadsheet
//! apps: a header row of data point labels, then one row per team (or per
//! match+team), columns in descriptor order.

use pitwall_core::{Profile, TEAM_DATA_POINTS, TIM_DATA_POINTS};

use crate::error::CodecError;

/// Render the team data sheet.
///
/// # Errors
///
/// Returns [`CodecError::Sheet`] when a row fails to serialize.
pub fn team_sheet_csv(profile: &Profile) -> Result<Vec<u8>, CodecError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Team number".to_owned()];
    header.extend(TEAM_DATA_POINTS.iter().map(|point| point.label.to_owned()));
    writer.write_record(&header)?;

    for (team, entry) in profile.team_data.get() {
        let mut row = vec![team];
        row.extend(TEAM_DATA_POINTS.iter().map(|point| (point.get)(&entry).to_cell()));
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|err| CodecError::Io(std::io::Error::other(err.to_string())))
}

/// Render the team-in-match data sheet.
///
/// # Errors
///
/// Returns [`CodecError::Sheet`] when a row fails to serialize.
pub fn tim_sheet_csv(profile: &Profile) -> Result<Vec<u8>, CodecError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Match number".to_owned(), "Team number".to_owned()];
    header.extend(TIM_DATA_POINTS.iter().map(|point| point.label.to_owned()));
    writer.write_record(&header)?;

    for (match_number, teams) in profile.tim_data.get() {
        for (team, entry) in teams {
            let mut row = vec![match_number.clone(), team];
            row.extend(TIM_DATA_POINTS.iter().map(|point| (point.get)(&entry).to_cell()));
            writer.write_record(&row)?;
        }
    }

    writer
        .into_inner()
        .map_err(|err| CodecError::Io(std::io::Error::other(err.to_string())))
}

#[cfg(test)]
mod tests {
    use pitwall_core::{TimEntry, TimDataMap};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn team_sheet_has_label_header_and_one_row_per_team() {
        let profile = Profile::empty();
        let mut team_data = profile.team_data.get();
        team_data.insert("118".to_owned(), pitwall_core::TeamEntry::default());
        team_data.insert(
            "254".to_owned(),
            pitwall_core::TeamEntry {
                can_intake_ground: true,
                strengths: "fast".to_owned(),
                ..pitwall_core::TeamEntry::default()
            },
        );
        profile.team_data.replace(team_data);

        let sheet = String::from_utf8(team_sheet_csv(&profile).unwrap()).unwrap();
        let lines: Vec<&str> = sheet.lines().collect();

        assert_eq!(
            lines[0],
            "Team number,Can Intake Ground,Strengths,Weaknesses,Team Notes"
        );
        assert_eq!(lines[1], "118,false,,,");
        assert_eq!(lines[2], "254,true,fast,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn tim_sheet_keys_rows_by_match_then_team() {
        let profile = Profile::empty();
        let mut tim_data = TimDataMap::new();
        let mut teams = std::collections::BTreeMap::new();
        teams.insert(
            "971".to_owned(),
            TimEntry {
                played_defense: true,
                defense_rating: 4,
                ..TimEntry::default()
            },
        );
        tim_data.insert("12".to_owned(), teams);
        profile.tim_data.replace(tim_data);

        let sheet = String::from_utf8(tim_sheet_csv(&profile).unwrap()).unwrap();
        let lines: Vec<&str> = sheet.lines().collect();

        assert!(lines[0].starts_with("Match number,Team number,Auto Strategies"));
        assert!(lines[1].starts_with("12,971,"));
        assert!(lines[1].contains("true,4"));
    }
}
