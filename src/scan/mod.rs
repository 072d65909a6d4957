//! File enumeration for codebase scans.
//!
//! Walks a project tree depth-first, pruning build and dependency directories,
//! and yields the JavaScript/TypeScript sources eligible for analysis. Test files
//! are never analysed themselves; their names are indexed so the testing rules
//! can tell which components already have a test.
//!
//! The walk is lenient: unreadable directories and files are skipped without
//! failing the scan. Skips are logged at debug level only.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::constants::{EXCLUDED_DIRS, SOURCE_EXTENSIONS, TEST_FILE_MARKERS};
use crate::models::ScanTarget;
use crate::utils::relative_display;

/// Knobs for [`enumerate`].
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Treat `.test.` / `.spec.` files as analysis targets too.
    pub include_test_files: bool,
}

/// Result of walking a project tree.
#[derive(Debug, Default)]
pub struct Enumeration {
    root: PathBuf,
    /// Source files to analyse, relative to the root, in traversal order.
    pub files: Vec<PathBuf>,
    /// Stems of test files seen during the walk (`Button` for `Button.test.tsx`).
    pub test_stems: BTreeSet<String>,
}

impl Enumeration {
    /// Read each enumerated file in order.
    ///
    /// Files that can no longer be read, or are not valid UTF-8, are skipped.
    pub fn targets(&self) -> impl Iterator<Item = ScanTarget> + '_ {
        self.files
            .iter()
            .filter_map(move |relative| read_target(&self.root, relative))
    }
}

/// Walk `root` and collect eligible source files.
///
/// A missing or unreadable root produces an empty enumeration.
pub fn enumerate(root: &Path, options: &WalkOptions) -> Enumeration {
    let mut enumeration = Enumeration {
        root: root.to_path_buf(),
        ..Enumeration::default()
    };
    walk_dir(root, root, options, &mut enumeration);
    enumeration
}

fn walk_dir(root: &Path, dir: &Path, options: &WalkOptions, out: &mut Enumeration) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };

    // Sorted so repeated scans of the same tree visit files in the same order
    let mut entries: Vec<_> = read_dir.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if !is_excluded_dir(&name) {
                walk_dir(root, &path, options, out);
            }
            continue;
        }

        if !(file_type.is_file() || (file_type.is_symlink() && path.is_file())) {
            continue;
        }
        if !is_source_file(&name) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if is_test_file(&name) {
            out.test_stems.insert(file_stem(&name).to_string());
            if !options.include_test_files {
                continue;
            }
        }
        out.files.push(relative);
    }
}

/// Read one file into a [`ScanTarget`], or `None` if it cannot be decoded.
pub fn read_target(root: &Path, relative: &Path) -> Option<ScanTarget> {
    let path = root.join(relative);
    match fs::read_to_string(&path) {
        Ok(content) => Some(ScanTarget::new(relative_display(relative), content)),
        Err(e) => {
            tracing::debug!(file = %path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}

pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

/// `.js`, `.jsx`, `.ts` or `.tsx`, matched case-sensitively.
pub fn is_source_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

pub fn is_test_file(name: &str) -> bool {
    TEST_FILE_MARKERS.iter().any(|marker| name.contains(marker))
}

fn file_stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}
