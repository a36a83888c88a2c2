//! Stats command handler

use super::{load_configured_records, resolve_now};
use chrono::NaiveDateTime;
use studytrack::config::Config;
use studytrack::core::deadlines::{display_status, DisplayStatus};
use studytrack::core::gpa;
use studytrack::core::stats::DashboardStats;

/// Run the stats command
pub fn run(now: Option<NaiveDateTime>, config: &Config) {
    let records = match load_configured_records(config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let now = resolve_now(now);
    let stats = DashboardStats::compute(&records.courses, &records.assignments, &records.grades);
    let overdue = records
        .assignments
        .iter()
        .filter(|a| display_status(a, now) == DisplayStatus::Overdue)
        .count();

    println!("\n=== Dashboard ===\n");
    println!("Courses:             {}", stats.total_courses);
    println!("Overall GPA:         {}", gpa::format_gpa(stats.gpa));
    println!("Pending assignments: {}", stats.pending_assignments());
    println!("Overdue:             {overdue}");
    println!(
        "Completed:           {}/{} ({}%)",
        stats.assignments.completed,
        stats.assignments.total,
        stats.completion_rate()
    );

    if stats.courses.is_empty() {
        return;
    }

    println!("\n=== Courses ===\n");
    for course_stats in &stats.courses {
        let grade = course_stats
            .current_grade
            .map_or_else(|| "N/A".to_string(), |g| format!("{g}%"));
        println!(
            "{:<28} grade {:>4} | {} pending, {}/{} done",
            records.course_name(course_stats.course_id),
            grade,
            course_stats.assignments.pending,
            course_stats.assignments.completed,
            course_stats.assignments.total
        );
    }
}
