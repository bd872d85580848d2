//! Reads the most recent release heading from an existing changelog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::error::{ChangelogError, Result};
use crate::version::Version;

/// Date format used in release headings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cutoff taken from the latest release heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseMarker {
    /// Midnight UTC of the release date; the Unix epoch when there was no release
    pub timestamp: DateTime<Utc>,
    pub version: Version,
}

impl ReleaseMarker {
    /// Marker used when the changelog has no release heading yet.
    pub fn none() -> Self {
        ReleaseMarker {
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            version: Version::default(),
        }
    }

    pub fn from_date(date: NaiveDate, version: Version) -> Self {
        ReleaseMarker {
            timestamp: date.and_time(NaiveTime::MIN).and_utc(),
            version,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Whether this marker came from an actual heading.
    pub fn is_release(&self) -> bool {
        *self != Self::none()
    }
}

fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"## (\[\d+\.\d+\.\d+\]) - (\d{4}-\d{2}-\d{2})")
            .expect("release heading regex is valid")
    })
}

/// Parses a single line as a release heading.
///
/// Returns `Ok(None)` when the line is not a heading or its date is not a
/// calendar date, and an error when the heading's version does not fit.
pub fn parse_release_heading(line: &str) -> Result<Option<ReleaseMarker>> {
    let Some(captures) = heading_regex().captures(line) else {
        return Ok(None);
    };
    let Ok(date) = NaiveDate::parse_from_str(&captures[2], DATE_FORMAT) else {
        debug!("Skipping heading with invalid date: {}", line.trim());
        return Ok(None);
    };
    let version = Version::parse(&captures[1])?;
    Ok(Some(ReleaseMarker::from_date(date, version)))
}

/// Finds the first release heading in the changelog at `path`.
///
/// # Returns
/// * `Ok(marker)` - The first valid heading, or [`ReleaseMarker::none`] if there is none
/// * `Err` - If the file cannot be read or the first heading's version is out of range
pub fn find_last_release(path: &Path) -> Result<ReleaseMarker> {
    let unreadable = |source| ChangelogError::ChangelogUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(unreadable)?;
        if let Some(marker) = parse_release_heading(&line)? {
            debug!("Last release {} on {}", marker.version, marker.date());
            return Ok(marker);
        }
    }

    debug!("No release heading in {}", path.display());
    Ok(ReleaseMarker::none())
}
