//! Grades command handler
//!
//! Prints each course's weighted grade with its letter and item breakdown,
//! followed by the overall GPA.

use super::load_configured_records;
use studytrack::config::Config;
use studytrack::core::gpa;
use studytrack::core::grading;
use studytrack::core::stats::{CourseStanding, Transcript};
use studytrack::{error, verbose};

/// Run the grades command
pub fn run(course: Option<u32>, config: &Config) {
    let records = match load_configured_records(config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let transcript = Transcript::build(&records.courses, &records.grades);

    if let Some(id) = course {
        let Some(standing) = transcript.standing(id) else {
            error!("Course {id} not found in records");
            eprintln!("✗ No course with id {id}");
            std::process::exit(1);
        };
        print_standing(standing);
        return;
    }

    if transcript.standings.is_empty() {
        println!("No courses recorded.");
        return;
    }

    println!("\n=== Course Grades ===\n");
    for standing in &transcript.standings {
        print_standing(standing);
    }

    match transcript.gpa {
        Some(g) => println!("Overall GPA: {g} ({} credits)", g.credits()),
        None => println!("Overall GPA: {}", gpa::format_gpa(None)),
    }
}

fn print_standing(standing: &CourseStanding) {
    let course = standing.course;
    let summary = match (&standing.percentage, standing.grade()) {
        (Err(e), _) => format!("✗ {e}"),
        (Ok(_), Some(g)) => format!(
            "{g}% {}",
            standing.letter().map_or_else(String::new, |l| l.to_string())
        ),
        (Ok(_), None) => "N/A".to_string(),
    };

    println!("{} ({} credits): {summary}", course.name, course.credits);
    if !course.instructor.is_empty() {
        verbose!("  Instructor: {}", course.instructor);
    }

    for item in &standing.items {
        let score = grading::item_percentage(item)
            .map_or_else(|_| "-".to_string(), |p| format!("{}%", grading::round_half_up(p)));
        println!(
            "  - {:<20} {:>6}/{:<6} weight {:>3}%  {score}",
            item.category,
            item.points,
            item.max_points,
            grading::round_half_up(item.weight * 100.0)
        );
    }
    println!();
}
