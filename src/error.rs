use std::path::PathBuf;

use thiserror::Error;

/// Process exit statuses, one per fatal cause.
pub mod exit_codes {
    /// Wrong command-line arguments
    pub const USAGE: i32 = 1;

    /// No repository marker found in any ancestor directory
    pub const NOT_A_REPOSITORY: i32 = 2;

    /// Reflog file missing or unreadable
    pub const REFLOG_UNREADABLE: i32 = 3;

    /// Existing changelog missing or unreadable
    pub const CHANGELOG_UNREADABLE: i32 = 4;

    /// Output changelog could not be written
    pub const OUTPUT_UNWRITABLE: i32 = 5;

    /// Configuration file unreadable or invalid
    pub const CONFIG: i32 = 6;

    /// User declined a confirmation prompt
    pub const CANCELLED: i32 = 130;
}

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Not in a git repository (searched upward from {})", .start.display())]
    NotARepository { start: PathBuf },

    #[error("Cannot read reflog {}: {source}", .path.display())]
    ReflogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read changelog {}: {source}", .path.display())]
    ChangelogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write changelog {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChangelogError::Version(msg.into())
    }

    /// Exit status the binary terminates with for this error.
    ///
    /// Usage errors never reach this type; clap reports them before any
    /// workflow runs. A version the changelog heading cannot hold counts as
    /// an unreadable changelog.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChangelogError::NotARepository { .. } => exit_codes::NOT_A_REPOSITORY,
            ChangelogError::ReflogUnreadable { .. } => exit_codes::REFLOG_UNREADABLE,
            ChangelogError::ChangelogUnreadable { .. } | ChangelogError::Version(_) => {
                exit_codes::CHANGELOG_UNREADABLE
            }
            ChangelogError::OutputUnwritable { .. } | ChangelogError::Io(_) => {
                exit_codes::OUTPUT_UNWRITABLE
            }
            ChangelogError::Config(_) => exit_codes::CONFIG,
            ChangelogError::Cancelled => exit_codes::CANCELLED,
        }
    }
}
