//! Report command handler
//!
//! Renders the Markdown gradebook report for the configured records file.

use super::{deadlines::effective_limit, load_configured_records, resolve_now};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use studytrack::config::Config;
use studytrack::core::deadlines::DeadlineRanker;
use studytrack::core::gpa;
use studytrack::core::report::{MarkdownReporter, ReportContext, ReportGenerator};
use studytrack::{error, info};

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path; defaults to `reports_dir/gradebook_<date>.md`
/// * `now` - Optional reference time; defaults to the local clock
/// * `config` - Configuration with the records file and reports directory
pub fn run(output_file: Option<&Path>, now: Option<NaiveDateTime>, config: &Config) {
    if let Err(err) = generate_report(output_file, now, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Output path for a report written at `now` when no `-o` was given
fn default_output_path(config: &Config, now: NaiveDateTime) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!("gradebook_{}.md", now.format("%Y-%m-%d"))))
}

fn generate_report(
    output_file: Option<&Path>,
    now: Option<NaiveDateTime>,
    config: &Config,
) -> Result<(), String> {
    let records = load_configured_records(config)?;
    let now = resolve_now(now);

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(config, now)?,
    };

    let ranker = DeadlineRanker::new(effective_limit(None, config));
    let ctx = ReportContext::new(&records, now, ranker);

    MarkdownReporter::new()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    println!("\n=== Summary ===");
    println!("Courses: {}", ctx.stats.total_courses);
    println!("Overall GPA: {}", gpa::format_gpa(ctx.transcript.gpa));
    println!("Upcoming deadlines: {}", ctx.deadlines.len());
    Ok(())
}
