//! Assignment listing with search and filters

use crate::core::models::{Assignment, AssignmentStatus, Priority};
use crate::debug;

/// Criteria for listing assignments. `None` (or an empty query) matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    /// Case-insensitive substring matched against title and description
    pub query: Option<String>,
    /// Exact status
    pub status: Option<AssignmentStatus>,
    /// Exact priority
    pub priority: Option<Priority>,
}

impl AssignmentFilter {
    /// Whether one assignment satisfies every criterion
    #[must_use]
    pub fn matches(&self, assignment: &Assignment) -> bool {
        let query_ok = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                assignment.title.to_lowercase().contains(&needle)
                    || assignment
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
        };

        query_ok
            && self.status.map_or(true, |s| s == assignment.status)
            && self.priority.map_or(true, |p| p == assignment.priority)
    }
}

/// Assignments matching `filter`, sorted by due date (then id)
#[must_use]
pub fn filter_assignments<'a>(
    assignments: &'a [Assignment],
    filter: &AssignmentFilter,
) -> Vec<&'a Assignment> {
    let mut matched: Vec<&Assignment> = assignments.iter().filter(|a| filter.matches(a)).collect();
    matched.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));

    debug!(
        "Assignment filter {filter:?} kept {} of {}",
        matched.len(),
        assignments.len()
    );
    matched
}
