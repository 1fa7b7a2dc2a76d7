//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the pantry CLI.

use std::path::PathBuf;

use chrono::Weekday;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pantry_engine_rs::SortField;

/// pantry - browse food-distribution locations
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show diagnostics)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the feed URL (default: from config)
    #[arg(long, global = true, env = "PANTRY_FEED_URL")]
    pub url: Option<String>,

    /// Read locations from a local JSON file instead of the feed
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Refresh from the feed before running
    #[arg(long, global = true)]
    pub refresh: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by the list, map, and export commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by day of week (repeatable; any selected day matches)
    #[arg(short, long, value_enum, action = clap::ArgAction::Append)]
    pub day: Vec<DayArg>,

    /// Select Monday through Friday (resets other filters first)
    #[arg(long, conflicts_with = "weekends")]
    pub weekdays: bool,

    /// Select Saturday and Sunday (resets other filters first)
    #[arg(long)]
    pub weekends: bool,

    /// Only locations actually open today
    #[arg(long)]
    pub today: bool,

    /// Free-text search over name, address, and ZIP
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locations as cards
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Sort by field
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Reverse sort order
        #[arg(long, requires = "sort")]
        reverse: bool,

        /// Limit results (default: 50)
        #[arg(long, default_value = "50")]
        limit: u32,

        /// Show all locations (no limit)
        #[arg(long)]
        all: bool,
    },

    /// Show map markers for locations with coordinates
    Map {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show details for a single location
    Show {
        /// Location name (case-insensitive)
        name: String,
    },

    /// Export the filtered locations as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Refresh the local cache from the feed
    Fetch,

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the feed URL
    SetUrl {
        /// The feed URL to store
        url: String,
    },
}

/// Day-of-week argument.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayArg {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<DayArg> for Weekday {
    fn from(day: DayArg) -> Self {
        match day {
            DayArg::Monday => Weekday::Mon,
            DayArg::Tuesday => Weekday::Tue,
            DayArg::Wednesday => Weekday::Wed,
            DayArg::Thursday => Weekday::Thu,
            DayArg::Friday => Weekday::Fri,
            DayArg::Saturday => Weekday::Sat,
            DayArg::Sunday => Weekday::Sun,
        }
    }
}

/// Sort-field argument.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    Name,
    City,
    Zip,
    Type,
}

impl From<SortArg> for SortField {
    fn from(field: SortArg) -> Self {
        match field {
            SortArg::Name => SortField::Name,
            SortArg::City => SortField::City,
            SortArg::Zip => SortField::Zip,
            SortArg::Type => SortField::Type,
        }
    }
}
