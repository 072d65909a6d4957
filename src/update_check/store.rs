//! Persistence of the last update-check time.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Clock, TimestampStore};
use crate::fs::{last_update_check_path, locked_read, locked_write};

/// Timestamp kept as RFC 3339 text in a state file.
#[derive(Debug, Clone)]
pub struct FileTimestampStore {
    path: PathBuf,
}

impl FileTimestampStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional file name inside `state_dir`.
    pub fn in_state_dir(state_dir: &Path) -> Self {
        Self::new(last_update_check_path(state_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimestampStore for FileTimestampStore {
    fn last_checked(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(content) = locked_read(&self.path)? else {
            return Ok(None);
        };
        match DateTime::parse_from_rfc3339(content.trim()) {
            Ok(at) => Ok(Some(at.with_timezone(&Utc))),
            Err(err) => {
                // Unreadable stamp: behave as if no check happened yet
                tracing::debug!(path = %self.path.display(), %err, "ignoring malformed timestamp");
                Ok(None)
            }
        }
    }

    fn record(&self, at: DateTime<Utc>) -> Result<()> {
        locked_write(&self.path, &at.to_rfc3339())
    }
}

/// In-process store, for tests and for callers without a state directory.
#[derive(Debug, Default)]
pub struct MemoryTimestampStore {
    value: Mutex<Option<DateTime<Utc>>>,
}

impl MemoryTimestampStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimestampStore for MemoryTimestampStore {
    fn last_checked(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(*self.value.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn record(&self, at: DateTime<Utc>) -> Result<()> {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(at);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
