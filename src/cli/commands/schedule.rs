//! Schedule command handler

use super::load_configured_records;
use chrono::NaiveDate;
use studytrack::config::Config;
use studytrack::core::records::Records;
use studytrack::core::schedule::{assignments_due_on, group_by_day, weekly_schedule};

/// Run the schedule command
pub fn run(date: Option<NaiveDate>, config: &Config) {
    let records = match load_configured_records(config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match date {
        Some(date) => print_due_on(&records, date),
        None => print_week(&records),
    }
}

fn print_week(records: &Records) {
    let entries = weekly_schedule(&records.courses);
    if entries.is_empty() {
        println!("No scheduled classes.");
        return;
    }

    println!("\n=== Weekly Schedule ===");
    for (day, group) in group_by_day(&entries) {
        println!("\n{day}");
        for entry in group {
            let location = if entry.location.is_empty() {
                String::new()
            } else {
                format!(" @ {}", entry.location)
            };
            println!("  {:<6} {}{location}", entry.time, entry.course_name);
        }
    }
}

fn print_due_on(records: &Records, date: NaiveDate) {
    let due = assignments_due_on(&records.assignments, date);
    if due.is_empty() {
        println!("Nothing due on {date}.");
        return;
    }

    println!("\n=== Due {} ===\n", date.format("%A %b %d"));
    for assignment in due {
        println!(
            "{} {} ({}) [{}]",
            assignment.due_date.format("%H:%M"),
            assignment.title,
            records.course_name(assignment.course_id),
            assignment.status
        );
    }
}
