//! CLI argument definitions for `StudyTrack`

use chrono::{NaiveDate, NaiveDateTime};
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use studytrack::config::ConfigOverrides;
use studytrack::core::models::{AssignmentStatus, Priority};
use studytrack::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a timestamp given as `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`
/// or a bare date (midnight).
///
/// # Errors
/// Returns a message naming the accepted formats.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            format!("Invalid timestamp '{value}' (expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DD HH:MM)")
        })
}

/// Parse a calendar date given as `YYYY-MM-DD`
///
/// # Errors
/// Returns a message when the date is malformed.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{value}' (expected YYYY-MM-DD)"))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `records_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show weighted course grades, letter grades and the overall GPA.
    Grades {
        /// Only show the course with this id
        #[arg(long, value_name = "ID")]
        course: Option<u32>,
    },
    /// List assignments by due date, with optional search and filters.
    Assignments {
        /// Case-insensitive text matched against title and description
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Only assignments with this status (pending|in-progress|completed)
        #[arg(long, value_name = "STATUS")]
        status: Option<AssignmentStatus>,

        /// Only assignments with this priority (low|medium|high)
        #[arg(long, value_name = "PRIORITY")]
        priority: Option<Priority>,

        /// Evaluate overdue status as of this time instead of now
        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        now: Option<NaiveDateTime>,
    },
    /// List the most urgent outstanding assignments.
    Deadlines {
        /// Maximum number of deadlines (defaults to config `deadline_limit`)
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Rank as of this time instead of now
        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        now: Option<NaiveDateTime>,
    },
    /// Show dashboard statistics and per-course assignment counts.
    Stats {
        /// Compute as of this time instead of now
        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        now: Option<NaiveDateTime>,
    },
    /// Show the weekly class schedule, or the assignments due on a date.
    Schedule {
        /// List assignments due on this date instead
        #[arg(long, value_name = "DATE", value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Generate a Markdown gradebook report.
    Report {
        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report as of this time instead of now
        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        now: Option<NaiveDateTime>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studytrack",
    about = "StudyTrack command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config records file
    #[arg(long = "config-records-file", value_name = "FILE")]
    pub config_records_file: Option<PathBuf>,

    /// Override config records file (short form)
    #[arg(long = "records", value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config deadline limit
    #[arg(long = "deadline-limit", visible_alias = "config-deadline-limit", value_name = "N")]
    pub config_deadline_limit: Option<usize>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--records`) take precedence over long-form
    /// flags (e.g., `--config-records-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            records_file: self
                .records
                .as_ref()
                .or(self.config_records_file.as_ref())
                .map(path_string),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(path_string),
            deadline_limit: self.config_deadline_limit,
        }
    }
}
