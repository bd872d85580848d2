//! Reader for the plain-text reflog of `HEAD`.
//!
//! Each line records one update of the ref:
//!
//! ```text
//! <old-sha> <new-sha> Name <email> 1700000000 +0100\tcommit: message
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ChangelogError, Result};

/// A commit recorded after the release cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// What happened to a single reflog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// No commit marker on the line (checkout, reset, merge, ...)
    NotACommit,
    /// Missing or unparsable timestamp
    BadTimestamp,
    /// Recorded at or before the cutoff
    BeforeCutoff,
    Commit(ReflogEntry),
}

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|\s)(\d{10})(?:\s|$)").expect("timestamp regex is valid")
    })
}

/// Extracts the first whitespace-delimited 10-digit Unix timestamp from a
/// reflog line header.
pub fn parse_timestamp(header: &str) -> Option<DateTime<Utc>> {
    let captures = timestamp_regex().captures(header)?;
    let seconds: i64 = captures[1].parse().ok()?;
    DateTime::from_timestamp(seconds, 0)
}

/// Classifies one reflog line against the release cutoff.
///
/// Only commits strictly after `cutoff` come back as [`LineOutcome::Commit`].
pub fn classify_line(line: &str, commit_marker: &str, cutoff: DateTime<Utc>) -> LineOutcome {
    let Some((header, message)) = line.split_once(commit_marker) else {
        return LineOutcome::NotACommit;
    };

    let Some(timestamp) = parse_timestamp(header) else {
        warn!("Skipping reflog line without a valid timestamp: {}", line);
        return LineOutcome::BadTimestamp;
    };

    if timestamp <= cutoff {
        debug!("Skipping commit from {} (not after {})", timestamp, cutoff);
        return LineOutcome::BeforeCutoff;
    }

    LineOutcome::Commit(ReflogEntry {
        timestamp,
        message: message.to_string(),
    })
}

/// Line counts gathered while scanning a reflog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub not_commits: usize,
    pub bad_timestamps: usize,
    pub before_cutoff: usize,
    pub commits: usize,
}

impl ScanStats {
    fn count(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::NotACommit => self.not_commits += 1,
            LineOutcome::BadTimestamp => self.bad_timestamps += 1,
            LineOutcome::BeforeCutoff => self.before_cutoff += 1,
            LineOutcome::Commit(_) => self.commits += 1,
        }
    }
}

/// Reads the reflog at `path`, returning the commits recorded after `cutoff`
/// in file order.
///
/// Malformed lines are skipped and counted; only failing to read the file is
/// an error.
pub fn read_reflog(
    path: &Path,
    commit_marker: &str,
    cutoff: DateTime<Utc>,
) -> Result<(Vec<ReflogEntry>, ScanStats)> {
    let unreadable = |source| ChangelogError::ReflogUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let mut reader = BufReader::new(file);
    let mut entries = Vec::new();
    let mut stats = ScanStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(unreadable)? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\n', '\r']);

        let outcome = classify_line(line, commit_marker, cutoff);
        stats.count(&outcome);
        if let LineOutcome::Commit(entry) = outcome {
            entries.push(entry);
        }
    }

    Ok((entries, stats))
}
