//! Main workflow orchestration logic
//!
//! Threads repository discovery, the last-release cutoff, the reflog scan,
//! message parsing and the changelog merge together. Kept free of clap and of
//! process exits so it can be driven programmatically.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::buckets::CategoryBuckets;
use crate::commit::{process_commit_message, ParseOutcome};
use crate::config::Config;
use crate::error::{ChangelogError, Result};
use crate::reflog::{read_reflog, ScanStats};
use crate::release::{find_last_release, ReleaseMarker};
use crate::repo::find_repo_root;
use crate::version::Version;
use crate::writer::{merge_with_previous, render_release, render_section, write_changelog};

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Existing changelog, resolved against the working directory
    pub changelog: PathBuf,

    /// Output path, resolved against the working directory; overrides config
    pub output: Option<PathBuf>,

    /// Write back to `changelog`
    pub in_place: bool,

    /// Render but write nothing
    pub dry_run: bool,

    /// Directory the repository search starts from
    pub start_dir: PathBuf,

    /// Date stamped on the new release heading
    pub date: NaiveDate,
}

impl RunArgs {
    /// Arguments for a default run over `changelog` starting at `start_dir`, dated today.
    pub fn new(changelog: impl Into<PathBuf>, start_dir: impl Into<PathBuf>) -> Self {
        RunArgs {
            changelog: changelog.into(),
            output: None,
            in_place: false,
            dry_run: false,
            start_dir: start_dir.into(),
            date: Local::now().date_naive(),
        }
    }
}

/// Result of a successful changelog run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub repo_root: PathBuf,

    /// Cutoff taken from the existing changelog
    pub previous: ReleaseMarker,

    /// Version of the generated release
    pub version: Version,

    pub buckets: CategoryBuckets,

    /// The rendered release section, without preamble
    pub section: String,

    /// Where the changelog was written; `None` for a dry run
    pub output: Option<PathBuf>,

    pub scan: ScanStats,
    pub accepted: usize,
    pub ignored: usize,
    pub dropped_segments: usize,
    pub warnings: Vec<BoundaryWarning>,
}

/// Runs the changelog workflow:
/// 1. Locate the repository root from `start_dir`
/// 2. Read the last release from the existing changelog
/// 3. Scan the reflog for commits after that release
/// 4. Parse commit messages into category buckets
/// 5. Render the next release and merge it ahead of the previous history
pub fn run(args: &RunArgs, config: &Config) -> Result<RunSummary> {
    run_with_confirmation(args, config, |_| true)
}

/// Same as [`run`], but an in-place write first asks `confirm_overwrite` with
/// the file about to be replaced. The question is only asked once the
/// repository, the changelog and the reflog have all been read; a `false`
/// answer ends the run with [`ChangelogError::Cancelled`] and writes nothing.
pub fn run_with_confirmation<F>(
    args: &RunArgs,
    config: &Config,
    confirm_overwrite: F,
) -> Result<RunSummary>
where
    F: FnOnce(&Path) -> bool,
{
    let start_dir = absolute_start(&args.start_dir)?;
    let repo_root = find_repo_root(&start_dir, &config.repository.marker)
        .ok_or(ChangelogError::NotARepository { start: start_dir })?;
    info!("Repository root: {}", repo_root.display());

    let previous = find_last_release(&args.changelog)?;
    let mut warnings = Vec::new();
    if !previous.is_release() {
        warnings.push(BoundaryWarning::NoPriorRelease {
            changelog: args.changelog.display().to_string(),
        });
    }

    let reflog_path = repo_root.join(&config.repository.reflog);
    let (entries, scan) = read_reflog(
        &reflog_path,
        &config.repository.commit_marker,
        previous.timestamp,
    )?;
    info!(
        "Scanned {} reflog lines, {} commits after {}",
        scan.lines,
        scan.commits,
        previous.date()
    );

    let mut buckets = CategoryBuckets::new(config.parser.accumulate);
    let mut accepted = 0;
    let mut ignored = 0;
    let mut dropped_segments = 0;
    for entry in &entries {
        match process_commit_message(&entry.message, &mut buckets) {
            ParseOutcome::Accepted(parsed) => {
                accepted += 1;
                dropped_segments += parsed.dropped_segments;
            }
            ParseOutcome::Ignored(reason) => {
                debug!("Ignoring commit message {:?}: {:?}", entry.message, reason);
                ignored += 1;
            }
        }
    }
    buckets.sort(config.output.category_order);

    if scan.bad_timestamps > 0 {
        warnings.push(BoundaryWarning::SkippedReflogLines {
            count: scan.bad_timestamps,
        });
    }
    if scan.commits == 0 && previous.is_release() {
        warnings.push(BoundaryWarning::NoNewCommits {
            last_release: previous.version,
        });
    } else if scan.commits > 0 && buckets.is_empty() {
        warnings.push(BoundaryWarning::NoRecognizedEntries {
            commits: scan.commits,
        });
    }

    let version = previous.version.next()?;
    let preamble = config.output.preamble();
    let section = render_section(&buckets, &version, args.date);

    let output = if args.dry_run {
        None
    } else {
        let previous_bytes =
            fs::read(&args.changelog).map_err(|source| ChangelogError::ChangelogUnreadable {
                path: args.changelog.clone(),
                source,
            })?;
        if !previous_bytes.is_empty() && !previous_bytes.starts_with(preamble.as_bytes()) {
            warnings.push(BoundaryWarning::PreambleMismatch {
                changelog: args.changelog.display().to_string(),
            });
        }

        let release = render_release(preamble, &buckets, &version, args.date);
        let merged = merge_with_previous(&release, &previous_bytes, preamble.len());

        let path = output_path(args, config, &repo_root);
        if args.in_place && !confirm_overwrite(&path) {
            return Err(ChangelogError::Cancelled);
        }
        write_changelog(&path, &merged)?;
        info!("Wrote {} ({} bytes)", path.display(), merged.len());
        Some(path)
    };

    Ok(RunSummary {
        repo_root,
        previous,
        version,
        buckets,
        section,
        output,
        scan,
        accepted,
        ignored,
        dropped_segments,
        warnings,
    })
}

/// Relative start directories are resolved so the ancestor walk can reach
/// directories above the working directory.
fn absolute_start(start_dir: &Path) -> Result<PathBuf> {
    if start_dir.is_absolute() {
        return Ok(start_dir.to_path_buf());
    }
    match fs::canonicalize(start_dir) {
        Ok(path) => Ok(path),
        Err(_) => Ok(std::env::current_dir()?.join(start_dir)),
    }
}

/// Where a run writes: the input file in place, the explicit output path, or
/// the configured path under the repository root.
pub fn output_path(args: &RunArgs, config: &Config, repo_root: &Path) -> PathBuf {
    if args.in_place {
        args.changelog.clone()
    } else if let Some(output) = &args.output {
        output.clone()
    } else {
        repo_root.join(&config.output.path)
    }
}
