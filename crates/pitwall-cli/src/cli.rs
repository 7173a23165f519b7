//! Command tree for the `pwl` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `pwl` binary.
#[derive(Debug, Parser)]
#[command(name = "pwl", version, about = "Pitwall - match scouting data tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (defaults to the configured or platform location)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Show the current profile's data
    Show,
    /// Set a data point value in the current profile
    Set {
        #[command(subcommand)]
        target: SetTarget,
    },
    /// Manage the current profile's match schedule
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },
    /// Run a profile operation
    Op {
        #[command(subcommand)]
        action: OpAction,
    },
    /// Exchange data with the sync server
    Sync {
        #[command(subcommand)]
        action: SyncAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List known profiles
    List,
    /// Create a new, empty profile
    Create { name: String },
    /// Make a profile the current one
    Switch { name: String },
    /// Rename a profile
    Rename { old: String, new: String },
    /// Move a profile to the trash
    Delete { name: String },
}

#[derive(Debug, Subcommand)]
pub enum SetTarget {
    /// Set a team-level data point
    Team {
        team: String,
        field: String,
        value: String,
    },
    /// Set a team-in-match data point
    Tim {
        match_number: String,
        team: String,
        field: String,
        value: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScheduleAction {
    /// Install a match schedule JSON file into the current profile
    Import { file: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum OpAction {
    /// Merge another profile into the current one (current wins ties)
    MergeFrom { other: String },
    /// Merge the current profile into another one (the target wins ties)
    MergeInto { target: String },
    /// Copy a profile under a new name
    Duplicate { source: String, new_name: String },
    /// Import a zip archive as a new profile
    ImportArchive { path: PathBuf, name: String },
    /// Import a directory of part files as a new profile
    ImportFolder { path: PathBuf, name: String },
    /// Export a profile as a timestamped zip archive
    ExportArchive { profile: String, dir: PathBuf },
    /// Export a profile's part files into a directory
    ExportFolder { profile: String, dir: PathBuf },
    /// Export a profile as spreadsheet sheets
    ExportSpreadsheet { profile: String, dir: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum SyncAction {
    /// Download a username's data into a new profile
    Pull { username: String, name: String },
    /// Upload a profile's data (defaults to the current profile)
    Push {
        username: String,
        #[arg(long)]
        profile: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, SetTarget};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn set_tim_parses_all_positionals() {
        let cli = Cli::try_parse_from([
            "pwl", "set", "tim", "12", "1678", "defense_rating", "4",
        ])
        .expect("cli should parse");

        let Commands::Set {
            target: SetTarget::Tim {
                match_number,
                team,
                field,
                value,
            },
        } = cli.command
        else {
            panic!("expected a set tim command");
        };
        assert_eq!(match_number, "12");
        assert_eq!(team, "1678");
        assert_eq!(field, "defense_rating");
        assert_eq!(value, "4");
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["pwl", "--verbose", "show"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show));
    }
}
