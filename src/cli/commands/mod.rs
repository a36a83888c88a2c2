//! CLI command handlers for `StudyTrack`.
//!
//! Each command is implemented in its own submodule. Helpers shared by the
//! records-based commands live here.

pub mod assignments;
pub mod config;
pub mod deadlines;
pub mod grades;
pub mod report;
pub mod schedule;
pub mod stats;

use chrono::NaiveDateTime;
use std::path::Path;
use studytrack::config::Config;
use studytrack::core::records::{load_records, Records};
use studytrack::{error, info};

/// Load the records file named by `paths.records_file`
///
/// # Errors
/// Returns a printable `✗ ...` message when no file is configured or it
/// cannot be loaded.
pub fn load_configured_records(config: &Config) -> Result<Records, String> {
    if config.paths.records_file.is_empty() {
        return Err(
            "✗ No records file configured (use --records or `config set records_file PATH`)"
                .to_string(),
        );
    }

    let path = Path::new(&config.paths.records_file);
    let records = load_records(path).map_err(|e| {
        error!("Failed to load records {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;

    info!(
        "Records loaded: {} ({} courses, {} assignments, {} grades)",
        path.display(),
        records.courses.len(),
        records.assignments.len(),
        records.grades.len()
    );
    Ok(records)
}

/// Resolve the reference time: the `--now` flag, else the local clock
pub fn resolve_now(now: Option<NaiveDateTime>) -> NaiveDateTime {
    now.unwrap_or_else(|| chrono::Local::now().naive_local())
}
