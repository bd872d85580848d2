use std::fmt;

use crate::version::Version;

/// Warnings that occur around the release boundary of a run.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The changelog has no release heading, so all history is new
    NoPriorRelease { changelog: String },
    /// No commit in the reflog is newer than the last release
    NoNewCommits { last_release: Version },
    /// Commits were found but none followed the ticket/category format
    NoRecognizedEntries { commits: usize },
    /// Reflog lines skipped for a missing or unparsable timestamp
    SkippedReflogLines { count: usize },
    /// The previous changelog does not start with the expected preamble, so
    /// the copied body may start mid-line
    PreambleMismatch { changelog: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorRelease { changelog } => {
                write!(
                    f,
                    "No release heading found in '{}'; treating all history as new",
                    changelog
                )
            }
            BoundaryWarning::NoNewCommits { last_release } => {
                write!(f, "No new commits since release {}", last_release)
            }
            BoundaryWarning::NoRecognizedEntries { commits } => {
                let noun = if *commits == 1 { "commit" } else { "commits" };
                write!(
                    f,
                    "{} new {} but none matched 'TICKET:Category:description'",
                    commits, noun
                )
            }
            BoundaryWarning::SkippedReflogLines { count } => {
                let noun = if *count == 1 { "line" } else { "lines" };
                write!(f, "Skipped {} reflog {} with an invalid timestamp", count, noun)
            }
            BoundaryWarning::PreambleMismatch { changelog } => {
                write!(
                    f,
                    "'{}' does not start with the expected preamble; its history is copied from a fixed offset",
                    changelog
                )
            }
        }
    }
}
