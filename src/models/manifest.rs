//! Read-only view of a project's `package.json`.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::constants::MANIFEST_FILE;

/// The parts of `package.json` consulted by the upgrade checker.
///
/// Dependency values are kept as raw JSON so that unusual entries (git URLs,
/// workspace objects) never make the whole manifest unreadable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Value>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, Value>,
}

impl PackageManifest {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load `<root>/package.json`.
    ///
    /// A missing or malformed manifest yields `None`; callers treat that as
    /// "nothing to check" rather than an error.
    pub fn load(root: &Path) -> Option<Self> {
        let path = root.join(MANIFEST_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "manifest not readable");
                return None;
            }
        };
        match Self::from_json(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "manifest is not valid JSON");
                None
            }
        }
    }

    /// Declared version of a dependency, looking at runtime dependencies first.
    pub fn version_of(&self, package: &str) -> Option<&str> {
        self.dependencies
            .get(package)
            .or_else(|| self.dev_dependencies.get(package))
            .and_then(Value::as_str)
    }

    /// Whether a package is declared in either dependency table.
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }

    /// All declared package names, runtime dependencies first.
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }
}
