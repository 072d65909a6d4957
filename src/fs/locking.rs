//! Advisory-locked reads and writes for state files.
//!
//! Two server instances may share a state directory, so the timestamp file is
//! always read under a shared lock and written under an exclusive one.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// Read a state file under a shared lock. A missing file reads as `None`.
pub fn locked_read(path: &Path) -> Result<Option<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to open {}", path.display()))
        }
    };
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;
    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}

/// Replace a state file's content under an exclusive lock.
///
/// The file is truncated only once the lock is held, so a concurrent reader
/// never observes it empty.
pub fn locked_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        super::ensure_dir(parent)?;
    }
    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
    file.set_len(0)
        .with_context(|| format!("Failed to truncate {}", path.display()))?;
    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
