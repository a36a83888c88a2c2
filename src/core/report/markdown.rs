//! Markdown report generator
//!
//! Renders `templates/report.md` with askama. Rows are pre-formatted here so
//! the template only lays out tables.

use crate::core::deadlines::display_status;
use crate::core::gpa;
use crate::core::grading;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

struct ItemRow {
    category: String,
    points: String,
    weight: String,
    score: String,
}

struct CourseRow {
    name: String,
    credits: u32,
    instructor: String,
    grade: String,
    letter: String,
    items: Vec<ItemRow>,
}

struct DeadlineRow {
    title: String,
    course: String,
    due: String,
    urgency: String,
    status: String,
    priority: String,
}

struct ScheduleRow {
    day: String,
    time: String,
    course: String,
    location: String,
}

#[derive(Template)]
#[template(path = "report.md")]
struct GradebookTemplate {
    generated_at: String,
    total_courses: usize,
    gpa: String,
    pending: usize,
    completion_rate: u32,
    courses: Vec<CourseRow>,
    deadlines: Vec<DeadlineRow>,
    schedule: Vec<ScheduleRow>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn course_rows(ctx: &ReportContext) -> Vec<CourseRow> {
        ctx.transcript
            .standings
            .iter()
            .map(|standing| {
                let grade = match (&standing.percentage, standing.grade()) {
                    (Err(e), _) => format!("error: {e}"),
                    (Ok(_), Some(g)) => format!("{g}%"),
                    (Ok(_), None) => "N/A".to_string(),
                };
                let items = standing
                    .items
                    .iter()
                    .map(|item| ItemRow {
                        category: item.category.clone(),
                        points: format!("{}/{}", item.points, item.max_points),
                        weight: format!("{}%", grading::round_half_up(item.weight * 100.0)),
                        score: grading::item_percentage(item).map_or_else(
                            |_| "-".to_string(),
                            |p| format!("{}%", grading::round_half_up(p)),
                        ),
                    })
                    .collect();

                CourseRow {
                    name: standing.course.name.clone(),
                    credits: standing.course.credits,
                    instructor: standing.course.instructor.clone(),
                    grade,
                    letter: standing
                        .letter()
                        .map_or_else(String::new, |l| l.to_string()),
                    items,
                }
            })
            .collect()
    }

    fn deadline_rows(ctx: &ReportContext) -> Vec<DeadlineRow> {
        ctx.deadlines
            .iter()
            .map(|d| DeadlineRow {
                title: d.assignment.title.clone(),
                course: ctx.records.course_name(d.assignment.course_id),
                due: d.due_date.format("%b %d %H:%M").to_string(),
                urgency: d.urgency.to_string(),
                status: display_status(d.assignment, ctx.now).to_string(),
                priority: d.assignment.priority.to_string(),
            })
            .collect()
    }

    fn schedule_rows(ctx: &ReportContext) -> Vec<ScheduleRow> {
        ctx.schedule
            .iter()
            .map(|e| ScheduleRow {
                day: e.day.to_string(),
                time: e.time.to_string(),
                course: e.course_name.to_string(),
                location: e.location.to_string(),
            })
            .collect()
    }

    /// Build the template values for a context
    #[allow(clippy::unused_self)]
    fn template(&self, ctx: &ReportContext) -> GradebookTemplate {
        GradebookTemplate {
            generated_at: ctx.now.format("%Y-%m-%d %H:%M").to_string(),
            total_courses: ctx.stats.total_courses,
            gpa: gpa::format_gpa(ctx.transcript.gpa),
            pending: ctx.stats.pending_assignments(),
            completion_rate: ctx.stats.completion_rate(),
            courses: Self::course_rows(ctx),
            deadlines: Self::deadline_rows(ctx),
            schedule: Self::schedule_rows(ctx),
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.template(ctx).render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deadlines::DeadlineRanker;
    use crate::core::records::Records;
    use chrono::NaiveDate;

    const RECORDS: &str = r#"
[[courses]]
id = 1
name = "Linear Algebra"
instructor = "Dr. Ortiz"
credits = 4
schedule = { days = ["Tuesday"], time = "10:00", location = "Room 12" }

[[courses]]
id = 2
name = "Poetry Workshop"
credits = 2

[[assignments]]
id = 1
title = "Eigenvalue worksheet"
course_id = 1
due_date = "2026-09-01T09:00:00"
priority = "high"

[[grades]]
id = 1
course_id = 1
category = "Midterm"
points = 45
max_points = 50
weight = 0.5
"#;

    #[test]
    fn test_render_contains_sections() {
        let records = Records::from_toml(RECORDS).expect("records should parse");
        let now = NaiveDate::from_ymd_opt(2026, 9, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("valid timestamp");
        let ctx = ReportContext::new(&records, now, DeadlineRanker::default());

        let output = MarkdownReporter::new().render(&ctx).expect("render should succeed");

        assert!(output.contains("Linear Algebra"));
        assert!(output.contains("90%"));
        assert!(output.contains("A-"));
        assert!(output.contains("Eigenvalue worksheet"));
        assert!(output.contains("today"));
        assert!(output.contains("Room 12"));
        assert!(output.contains("No grades recorded"));
        assert!(output.contains("3.30"));
    }
}
