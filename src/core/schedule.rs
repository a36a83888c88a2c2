//! Weekly class schedule and calendar-day lookups

use crate::core::models::{Assignment, Course, CourseId};
use chrono::{NaiveDate, Weekday};

/// One class meeting in the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry<'a> {
    /// Course identifier
    pub course_id: CourseId,
    /// Course name
    pub course_name: &'a str,
    /// Instructor name
    pub instructor: &'a str,
    /// Day of the meeting
    pub day: Weekday,
    /// Meeting time as entered
    pub time: &'a str,
    /// Room or building
    pub location: &'a str,
}

/// Expand every course's schedule into meetings, ordered Monday to Sunday
/// and then by time string.
#[must_use]
pub fn weekly_schedule(courses: &[Course]) -> Vec<ScheduleEntry<'_>> {
    let mut entries: Vec<ScheduleEntry<'_>> = courses
        .iter()
        .filter_map(|course| course.schedule.as_ref().map(|s| (course, s)))
        .flat_map(|(course, schedule)| {
            schedule.days.iter().map(move |day| ScheduleEntry {
                course_id: course.id,
                course_name: &course.name,
                instructor: &course.instructor,
                day: *day,
                time: &schedule.time,
                location: &schedule.location,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        a.day
            .num_days_from_monday()
            .cmp(&b.day.num_days_from_monday())
            .then_with(|| a.time.cmp(b.time))
    });

    entries
}

/// Group schedule entries by day, keeping Monday-to-Sunday order and
/// skipping days without meetings.
#[must_use]
pub fn group_by_day<'a, 'b>(
    entries: &'b [ScheduleEntry<'a>],
) -> Vec<(Weekday, Vec<&'b ScheduleEntry<'a>>)> {
    let mut groups: Vec<(Weekday, Vec<&'b ScheduleEntry<'a>>)> = Vec::new();
    for entry in entries {
        if let Some((day, group)) = groups.last_mut() {
            if *day == entry.day {
                group.push(entry);
                continue;
            }
        }
        groups.push((entry.day, vec![entry]));
    }
    groups
}

/// Assignments due on a given calendar day, in input order
#[must_use]
pub fn assignments_due_on(assignments: &[Assignment], date: NaiveDate) -> Vec<&Assignment> {
    assignments
        .iter()
        .filter(|a| a.due_date.date() == date)
        .collect()
}
