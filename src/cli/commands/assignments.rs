//! Assignments command handler

use super::{load_configured_records, resolve_now};
use chrono::NaiveDateTime;
use studytrack::config::Config;
use studytrack::core::assignments::{filter_assignments, AssignmentFilter};
use studytrack::core::deadlines::display_status;
use studytrack::verbose;

/// Run the assignments command
pub fn run(filter: &AssignmentFilter, now: Option<NaiveDateTime>, config: &Config) {
    let records = match load_configured_records(config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let now = resolve_now(now);
    let listed = filter_assignments(&records.assignments, filter);
    verbose!(
        "{} of {} assignments match",
        listed.len(),
        records.assignments.len()
    );

    if listed.is_empty() {
        println!("No assignments match.");
        return;
    }

    println!("\n=== Assignments ===\n");
    for assignment in listed {
        println!(
            "{} {:<28} {:<24} {:<11} {}",
            assignment.due_date.format("%Y-%m-%d %H:%M"),
            assignment.title,
            records.course_name(assignment.course_id),
            display_status(assignment, now).to_string(),
            assignment.priority
        );
        if let Some(description) = assignment.description.as_deref() {
            verbose!("    {description}");
        }
    }
}
