//! Core module for grade aggregation, GPA and deadline ranking

pub mod assignments;
pub mod config;
pub mod deadlines;
pub mod gpa;
pub mod grading;
pub mod letter;
pub mod models;
pub mod records;
pub mod report;
pub mod schedule;
pub mod stats;

/// Returns the current version of the `StudyTrack` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
