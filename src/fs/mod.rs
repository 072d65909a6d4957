//! State files kept between runs, currently only the update-check timestamp.

pub mod locking;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use locking::{locked_read, locked_write};

pub const LAST_UPDATE_CHECK_FILE: &str = "last-update-check";

/// Path of the update-check timestamp inside `state_dir`.
pub fn last_update_check_path(state_dir: &Path) -> PathBuf {
    state_dir.join(LAST_UPDATE_CHECK_FILE)
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_last_update_check_path() {
        let path = last_update_check_path(Path::new("/state"));
        assert_eq!(path, PathBuf::from("/state/last-update-check"));
    }
}
