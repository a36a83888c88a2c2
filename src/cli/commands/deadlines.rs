//! Deadlines command handler

use super::{load_configured_records, resolve_now};
use chrono::NaiveDateTime;
use studytrack::config::Config;
use studytrack::core::deadlines::{display_status, DeadlineRanker, DEFAULT_DEADLINE_LIMIT};
use studytrack::verbose;

/// Effective limit: the `--limit` flag, else config `deadlines.limit`, else the default
pub fn effective_limit(limit: Option<usize>, config: &Config) -> usize {
    limit
        .or_else(|| (config.deadlines.limit > 0).then_some(config.deadlines.limit))
        .unwrap_or(DEFAULT_DEADLINE_LIMIT)
}

/// Run the deadlines command
pub fn run(limit: Option<usize>, now: Option<NaiveDateTime>, config: &Config) {
    let records = match load_configured_records(config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let now = resolve_now(now);
    let ranker = DeadlineRanker::new(effective_limit(limit, config));
    verbose!(
        "Ranking deadlines as of {} (limit {})",
        now.format("%Y-%m-%d %H:%M"),
        ranker.limit()
    );

    let ranked = ranker.rank(&records.assignments, now);
    if ranked.is_empty() {
        println!("✓ No upcoming deadlines");
        return;
    }

    println!("\n=== Upcoming Deadlines ===\n");
    for d in &ranked {
        println!(
            "[{:<8}] {} ({}) due {} | {} | {}",
            d.urgency.to_string(),
            d.assignment.title,
            records.course_name(d.assignment.course_id),
            d.due_date.format("%a %b %d %H:%M"),
            display_status(d.assignment, now),
            d.assignment.priority
        );
    }
}
