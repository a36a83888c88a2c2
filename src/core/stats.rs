//! Dashboard and per-course statistics
//!
//! Builds on the grade aggregator and GPA converter to summarize a full set
//! of records: one [`CourseStanding`] per course, the overall GPA, and the
//! assignment counts shown on a dashboard.

use crate::core::gpa::{self, Gpa};
use crate::core::grading::{self, GradeError};
use crate::core::letter::LetterGrade;
use crate::core::models::{Assignment, AssignmentStatus, Course, CourseId, Grade};
use crate::{debug, warn};

/// Grade standing of a single course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStanding<'a> {
    /// The course
    pub course: &'a Course,
    /// Graded items belonging to the course
    pub items: Vec<&'a Grade>,
    /// Unrounded weighted percentage, `Ok(None)` when ungraded
    pub percentage: Result<Option<f64>, GradeError>,
}

impl CourseStanding<'_> {
    /// Rounded course grade, `None` when ungraded or failed
    ///
    /// The percentage is always finite here (non-finite results fail the
    /// course), so rounding only saturates for percentages outside the
    /// `i64` range, far beyond any real extra credit.
    #[must_use]
    pub fn grade(&self) -> Option<i64> {
        self.percentage
            .as_ref()
            .ok()
            .copied()
            .flatten()
            .map(grading::round_half_up)
    }

    /// Letter grade of the rounded course grade
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn letter(&self) -> Option<LetterGrade> {
        self.grade()
            .map(|g| LetterGrade::from_percentage(g as f64))
    }
}

/// Per-course standings plus the overall GPA
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript<'a> {
    /// One standing per course, in input order
    pub standings: Vec<CourseStanding<'a>>,
    /// Credit-weighted GPA, `None` when no course is graded
    pub gpa: Option<Gpa>,
}

impl<'a> Transcript<'a> {
    /// Build standings for every course and the overall GPA.
    ///
    /// The GPA uses each course's rounded grade. A course whose grade cannot
    /// be computed is excluded from the GPA like an ungraded course.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(courses: &'a [Course], grades: &'a [Grade]) -> Self {
        let standings: Vec<CourseStanding<'a>> = courses
            .iter()
            .map(|course| {
                let items = grading::grades_for_course(grades, course.id);
                let percentage = grading::weighted_percentage(items.iter().copied());
                if let Err(e) = &percentage {
                    warn!("Course {} ({}) has no computable grade: {e}", course.id, course.name);
                }
                CourseStanding {
                    course,
                    items,
                    percentage,
                }
            })
            .collect();

        let gpa = gpa::overall_gpa(
            standings
                .iter()
                .map(|s| (s.course, s.grade().map(|g| g as f64))),
        );

        debug!(
            "Transcript built for {} courses, GPA {}",
            standings.len(),
            gpa::format_gpa(gpa)
        );

        Self { standings, gpa }
    }

    /// Look up the standing of one course
    #[must_use]
    pub fn standing(&self, course_id: CourseId) -> Option<&CourseStanding<'a>> {
        self.standings.iter().find(|s| s.course.id == course_id)
    }
}

/// Assignment counts for one course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssignmentCounts {
    /// Assignments with status `pending`
    pub pending: usize,
    /// Assignments with status `completed`
    pub completed: usize,
    /// All assignments
    pub total: usize,
}

impl AssignmentCounts {
    /// Count assignments by status
    pub fn tally<'a, I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        assignments
            .into_iter()
            .fold(Self::default(), |mut counts, a| {
                match a.status {
                    AssignmentStatus::Pending => counts.pending += 1,
                    AssignmentStatus::Completed => counts.completed += 1,
                    AssignmentStatus::InProgress => {}
                }
                counts.total += 1;
                counts
            })
    }

    /// Completed share as a rounded percentage, 0 when there are no assignments
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        grading::round_half_up(self.completed as f64 / self.total as f64 * 100.0) as u32
    }
}

/// Statistics for a single course card
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStats {
    /// Course identifier
    pub course_id: CourseId,
    /// Assignment counts for the course
    pub assignments: AssignmentCounts,
    /// Rounded current grade, `None` when ungraded
    pub current_grade: Option<i64>,
}

/// Dashboard summary across all records
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Number of courses
    pub total_courses: usize,
    /// Assignment counts across all courses
    pub assignments: AssignmentCounts,
    /// Overall GPA
    pub gpa: Option<Gpa>,
    /// Per-course statistics, in course order
    pub courses: Vec<CourseStats>,
}

impl DashboardStats {
    /// Compute the dashboard summary
    #[must_use]
    pub fn compute(courses: &[Course], assignments: &[Assignment], grades: &[Grade]) -> Self {
        Self::from_transcript(&Transcript::build(courses, grades), assignments)
    }

    /// Summarize an already built transcript together with the assignments
    #[must_use]
    pub fn from_transcript(transcript: &Transcript, assignments: &[Assignment]) -> Self {
        let course_stats = transcript
            .standings
            .iter()
            .map(|standing| CourseStats {
                course_id: standing.course.id,
                assignments: AssignmentCounts::tally(
                    assignments
                        .iter()
                        .filter(|a| a.course_id == standing.course.id),
                ),
                current_grade: standing.grade(),
            })
            .collect();

        Self {
            total_courses: transcript.standings.len(),
            assignments: AssignmentCounts::tally(assignments),
            gpa: transcript.gpa,
            courses: course_stats,
        }
    }

    /// Pending assignments across all courses
    #[must_use]
    pub const fn pending_assignments(&self) -> usize {
        self.assignments.pending
    }

    /// Completion rate across all courses
    #[must_use]
    pub fn completion_rate(&self) -> u32 {
        self.assignments.completion_rate()
    }
}
