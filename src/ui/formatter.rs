//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::RunSummary;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// The release section indented for terminal output; blank lines stay blank.
pub fn section_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {}", line)
            }
        })
        .collect()
}

/// Display the release section generated by a dry run.
pub fn display_section(section: &str) {
    println!("\n{}", style("Generated release (dry run):").bold());
    for line in section_lines(section) {
        println!("{}", line);
    }
}

/// Lines describing what a run scanned and produced.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let previous = if summary.previous.is_release() {
        format!(
            "{} ({})",
            summary.previous.version.bracketed(),
            summary.previous.date()
        )
    } else {
        "none".to_string()
    };

    let mut lines = vec![
        format!("Repository: {}", summary.repo_root.display()),
        format!("Previous release: {}", previous),
        format!(
            "Reflog: {} lines, {} new commits",
            summary.scan.lines, summary.scan.commits
        ),
        format!(
            "Messages: {} accepted, {} ignored, {} segments dropped",
            summary.accepted, summary.ignored, summary.dropped_segments
        ),
    ];

    for bucket in summary.buckets.iter() {
        lines.push(format!("  {}: {}", bucket.category, bucket.entries.len()));
    }

    lines
}

/// What happened to the generated release.
pub fn outcome_line(summary: &RunSummary) -> String {
    match &summary.output {
        Some(path) => format!(
            "Wrote {} to {}",
            summary.version.bracketed(),
            path.display()
        ),
        None => format!("Dry run: {} not written", summary.version.bracketed()),
    }
}

/// Display the run summary followed by the outcome.
pub fn display_summary(summary: &RunSummary) {
    println!("\n{}", style("Changelog summary").bold());
    for line in summary_lines(summary) {
        println!("  {}", line);
    }

    if summary.output.is_some() {
        display_success(&outcome_line(summary));
    } else {
        display_status(&outcome_line(summary));
    }
}
