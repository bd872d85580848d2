use std::path::{Path, PathBuf};

use tracing::debug;

/// Finds the repository root containing `start`.
///
/// Checks `start` itself, then each ancestor, for an entry named `marker`
/// (a directory or a file, so worktrees with a `.git` file also count).
/// Returns `None` once the filesystem root has been checked without a match.
/// The process working directory is never changed.
pub fn find_repo_root(start: &Path, marker: &str) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(marker).exists() {
            debug!("Found repository root at {}", dir.display());
            return Some(dir.to_path_buf());
        }
        debug!("{} is not a git repo...", dir.display());
    }
    None
}
