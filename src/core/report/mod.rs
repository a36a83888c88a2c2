//! Report generation module
//!
//! Renders a gradebook report (course grades, GPA, upcoming deadlines and the
//! weekly schedule) from a set of records at a fixed point in time.

pub mod markdown;

use crate::core::deadlines::{DeadlineRanker, RankedDeadline};
use crate::core::records::Records;
use crate::core::schedule::{self, ScheduleEntry};
use crate::core::stats::{DashboardStats, Transcript};
use chrono::NaiveDateTime;
use std::error::Error;
use std::path::Path;

pub use markdown::MarkdownReporter;

/// Data context for report generation
///
/// Everything a report shows is computed once here so renderers only format.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Source records
    pub records: &'a Records,
    /// Time the report describes
    pub now: NaiveDateTime,
    /// Per-course standings and GPA
    pub transcript: Transcript<'a>,
    /// Dashboard counts
    pub stats: DashboardStats,
    /// Most urgent outstanding assignments
    pub deadlines: Vec<RankedDeadline<'a>>,
    /// Weekly class meetings
    pub schedule: Vec<ScheduleEntry<'a>>,
}

impl<'a> ReportContext<'a> {
    /// Compute a report context from records as of `now`
    #[must_use]
    pub fn new(records: &'a Records, now: NaiveDateTime, ranker: DeadlineRanker) -> Self {
        let transcript = Transcript::build(&records.courses, &records.grades);
        let stats = DashboardStats::from_transcript(&transcript, &records.assignments);
        Self {
            records,
            now,
            transcript,
            stats,
            deadlines: ranker.rank(&records.assignments, now),
            schedule: schedule::weekly_schedule(&records.courses),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
