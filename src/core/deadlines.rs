//! Deadline urgency ranking
//!
//! Outstanding assignments are ordered for an "upcoming deadlines" view:
//! overdue work first, then work due today, due tomorrow, and everything
//! later, each group earliest-due first. The current time is always passed
//! in, so the same inputs reproduce the same list.
//!
//! A deadline earlier today is `DueToday`, not `Overdue`: a deadline counts as
//! due by the end of its calendar day.

use crate::core::models::{Assignment, AssignmentStatus};
use crate::debug;
use chrono::{Days, NaiveDateTime};
use std::fmt;

/// Number of deadlines returned when no limit is given
pub const DEFAULT_DEADLINE_LIMIT: usize = 5;

/// How pressing a deadline is relative to the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    /// Due after tomorrow
    Later = 0,
    /// Due tomorrow
    DueTomorrow = 1,
    /// Due today, whether or not the time has passed
    DueToday = 2,
    /// Due on an earlier day
    Overdue = 3,
}

impl Urgency {
    /// Classify a due timestamp against `now` using local calendar days
    #[must_use]
    pub fn classify(due: NaiveDateTime, now: NaiveDateTime) -> Self {
        let today = now.date();
        let due_day = due.date();

        if due_day == today {
            Self::DueToday
        } else if due < now {
            Self::Overdue
        } else if today.checked_add_days(Days::new(1)) == Some(due_day) {
            Self::DueTomorrow
        } else {
            Self::Later
        }
    }

    /// Ordinal rank (0-3), higher is more urgent
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Later => write!(f, "later"),
            Self::DueTomorrow => write!(f, "tomorrow"),
            Self::DueToday => write!(f, "today"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// An outstanding assignment with its urgency
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDeadline<'a> {
    /// The assignment
    pub assignment: &'a Assignment,
    /// Urgency relative to the ranking time
    pub urgency: Urgency,
    /// Due timestamp
    pub due_date: NaiveDateTime,
}

/// Orders outstanding assignments by urgency and due time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineRanker {
    limit: usize,
}

impl Default for DeadlineRanker {
    fn default() -> Self {
        Self::new(DEFAULT_DEADLINE_LIMIT)
    }
}

impl DeadlineRanker {
    /// Create a ranker returning at most `limit` deadlines
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Maximum number of deadlines returned
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Rank all non-completed assignments as of `now`.
    ///
    /// Sorted by descending urgency, then ascending due time, then id;
    /// truncated to the limit.
    #[must_use]
    pub fn rank<'a>(&self, assignments: &'a [Assignment], now: NaiveDateTime) -> Vec<RankedDeadline<'a>> {
        let mut ranked: Vec<RankedDeadline<'a>> = assignments
            .iter()
            .filter(|a| !a.is_completed())
            .map(|a| RankedDeadline {
                assignment: a,
                urgency: Urgency::classify(a.due_date, now),
                due_date: a.due_date,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.urgency
                .cmp(&a.urgency)
                .then_with(|| a.due_date.cmp(&b.due_date))
                .then_with(|| a.assignment.id.cmp(&b.assignment.id))
        });

        debug!(
            "Ranked {} outstanding of {} assignments, keeping {}",
            ranked.len(),
            assignments.len(),
            self.limit
        );

        ranked.truncate(self.limit);
        ranked
    }
}

/// Rank upcoming deadlines with an explicit limit (`None` uses the default)
#[must_use]
pub fn upcoming_deadlines(
    assignments: &[Assignment],
    now: NaiveDateTime,
    limit: Option<usize>,
) -> Vec<RankedDeadline<'_>> {
    DeadlineRanker::new(limit.unwrap_or(DEFAULT_DEADLINE_LIMIT)).rank(assignments, now)
}

/// Status shown for an assignment in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    /// Not started
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
    /// Not completed and due on an earlier day
    Overdue,
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// Status to display for an assignment as of `now`
#[must_use]
pub fn display_status(assignment: &Assignment, now: NaiveDateTime) -> DisplayStatus {
    match assignment.status {
        AssignmentStatus::Completed => DisplayStatus::Completed,
        _ if Urgency::classify(assignment.due_date, now) == Urgency::Overdue => {
            DisplayStatus::Overdue
        }
        AssignmentStatus::Pending => DisplayStatus::Pending,
        AssignmentStatus::InProgress => DisplayStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid timestamp")
    }

    fn assignment(id: u32, due: NaiveDateTime) -> Assignment {
        Assignment::new(id, format!("Assignment {id}"), 1, due)
    }

    #[test]
    fn test_classify() {
        let now = at(15, 17);
        assert_eq!(Urgency::classify(at(14, 9), now), Urgency::Overdue);
        assert_eq!(Urgency::classify(at(15, 8), now), Urgency::DueToday);
        assert_eq!(Urgency::classify(at(15, 23), now), Urgency::DueToday);
        assert_eq!(Urgency::classify(at(16, 0), now), Urgency::DueTomorrow);
        assert_eq!(Urgency::classify(at(17, 9), now), Urgency::Later);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Urgency::Overdue.rank(), 3);
        assert_eq!(Urgency::DueToday.rank(), 2);
        assert_eq!(Urgency::DueTomorrow.rank(), 1);
        assert_eq!(Urgency::Later.rank(), 0);
    }

    #[test]
    fn test_rank_order() {
        let now = at(15, 12);
        let assignments = vec![
            assignment(4, at(22, 9)),
            assignment(3, at(16, 9)),
            assignment(2, at(15, 18)),
            assignment(1, at(14, 9)),
        ];

        let ranked = DeadlineRanker::default().rank(&assignments, now);
        let ids: Vec<u32> = ranked.iter().map(|r| r.assignment.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(ranked[0].urgency, Urgency::Overdue);
        assert_eq!(ranked[3].urgency, Urgency::Later);
    }

    #[test]
    fn test_completed_excluded() {
        let now = at(15, 12);
        let assignments = vec![
            assignment(1, at(10, 9)).with_status(AssignmentStatus::Completed),
            assignment(2, at(20, 9)),
        ];

        let ranked = upcoming_deadlines(&assignments, now, None);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].assignment.id, 2);
    }

    #[test]
    fn test_limit_truncates() {
        let now = at(1, 12);
        let assignments: Vec<Assignment> = (1..=8).map(|i| assignment(i, at(i + 2, 9))).collect();

        assert_eq!(DeadlineRanker::default().rank(&assignments, now).len(), 5);
        assert_eq!(upcoming_deadlines(&assignments, now, Some(2)).len(), 2);
        assert!(upcoming_deadlines(&assignments, now, Some(0)).is_empty());
    }

    #[test]
    fn test_same_urgency_sorted_by_due_then_id() {
        let now = at(1, 12);
        let assignments = vec![
            assignment(9, at(20, 9)),
            assignment(5, at(10, 9)),
            assignment(2, at(20, 9)),
        ];

        let ids: Vec<u32> = DeadlineRanker::default()
            .rank(&assignments, now)
            .iter()
            .map(|r| r.assignment.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_repeatable() {
        let now = at(15, 12);
        let assignments = vec![assignment(1, at(16, 9)), assignment(2, at(13, 9))];
        let ranker = DeadlineRanker::new(3);
        assert_eq!(ranker.rank(&assignments, now), ranker.rank(&assignments, now));
    }

    #[test]
    fn test_display_status() {
        let now = at(15, 12);
        let late = assignment(1, at(14, 9));
        let late_done = assignment(2, at(14, 9)).with_status(AssignmentStatus::Completed);
        let earlier_today = assignment(3, at(15, 8)).with_status(AssignmentStatus::InProgress);

        assert_eq!(display_status(&late, now), DisplayStatus::Overdue);
        assert_eq!(display_status(&late_done, now), DisplayStatus::Completed);
        assert_eq!(display_status(&earlier_today, now), DisplayStatus::InProgress);
    }
}
