//! Renders category buckets as a changelog release and merges it with the
//! previous changelog.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::buckets::CategoryBuckets;
use crate::error::{ChangelogError, Result};
use crate::release::DATE_FORMAT;
use crate::version::Version;

/// Formats one release section in Keep a Changelog layout.
///
/// The section ends with a blank line so the previous releases can follow
/// directly.
pub fn render_section(buckets: &CategoryBuckets, version: &Version, date: NaiveDate) -> String {
    let mut section = format!("## {} - {}\n", version.bracketed(), date.format(DATE_FORMAT));

    for bucket in buckets.iter() {
        section.push_str(&format!("\n### {}\n\n", bucket.category));
        for entry in &bucket.entries {
            section.push_str(&format!("- {}\n", entry));
        }
    }

    section.push('\n');
    section
}

/// Preamble followed by the new release section.
pub fn render_release(
    preamble: &str,
    buckets: &CategoryBuckets,
    version: &Version,
    date: NaiveDate,
) -> String {
    let mut document = preamble.to_string();
    document.push_str(&render_section(buckets, version, date));
    document
}

/// Appends the previous changelog body to a freshly rendered release.
///
/// The body is the raw bytes of `previous` from offset `preamble_len`; a
/// previous file shorter than that contributes nothing.
pub fn merge_with_previous(new_release: &str, previous: &[u8], preamble_len: usize) -> Vec<u8> {
    let tail = previous.get(preamble_len..).unwrap_or_default();
    let mut merged = Vec::with_capacity(new_release.len() + tail.len());
    merged.extend_from_slice(new_release.as_bytes());
    merged.extend_from_slice(tail);
    merged
}

/// Writes the merged changelog to `path`, replacing any existing file.
pub fn write_changelog(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| ChangelogError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
