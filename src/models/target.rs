use std::path::Path;

/// A source file pulled into one analysis pass.
///
/// Content is read once by the enumerator and never re-validated against disk.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    pub content: String,
}

impl ScanTarget {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Final path component, e.g. `Button.tsx`.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name up to the first `.`, e.g. `Button` for `Button.styles.tsx`.
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        name.split('.').next().unwrap_or(name)
    }

    /// Extension without the dot, if any.
    pub fn extension(&self) -> Option<&str> {
        Path::new(self.file_name())
            .extension()
            .and_then(|ext| ext.to_str())
    }
}
