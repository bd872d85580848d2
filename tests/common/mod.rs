//! Shared helpers for building scratch repositories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const FIXTURE_CHANGELOG: &str = "tests/fixtures/CHANGELOG.md";

/// 2023-05-01T00:00:00Z, the date of the fixture's latest release.
pub const RELEASE_MIDNIGHT: i64 = 1_682_899_200;

/// One reflog line recording a commit at `timestamp`.
pub fn commit_line(timestamp: i64, message: &str) -> String {
    format!(
        "0000000000000000000000000000000000000000 a94a8fe5ccb19ba61c4c0873d391e987982fbbd3 Jane Doe <jane@example.com> {} +0000\tcommit: {}",
        timestamp, message
    )
}

/// A reflog line that is not a commit.
pub fn checkout_line(timestamp: i64) -> String {
    format!(
        "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3 a94a8fe5ccb19ba61c4c0873d391e987982fbbd3 Jane Doe <jane@example.com> {} +0000\tcheckout: moving from main to topic",
        timestamp
    )
}

/// Scratch repository: a `.git` directory with a reflog at `.git/logs/HEAD`.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    pub fn new(reflog_lines: &[String]) -> Self {
        let dir = TempDir::new().unwrap();
        let logs = dir.path().join(".git").join("logs");
        fs::create_dir_all(&logs).unwrap();
        let mut reflog = reflog_lines.join("\n");
        reflog.push('\n');
        fs::write(logs.join("HEAD"), reflog).unwrap();
        TestRepo { dir }
    }

    /// Repository with a `.git` directory but no reflog.
    pub fn without_reflog() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        TestRepo { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Copies the fixture changelog into the repository and returns its path.
    pub fn add_changelog(&self) -> PathBuf {
        let path = self.root().join("CHANGELOG.md");
        fs::copy(FIXTURE_CHANGELOG, &path).unwrap();
        path
    }

    pub fn write_changelog(&self, content: &str) -> PathBuf {
        let path = self.root().join("CHANGELOG.md");
        fs::write(&path, content).unwrap();
        path
    }
}
