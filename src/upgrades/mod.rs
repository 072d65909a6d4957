//! Manifest-level upgrade checks against `package.json`.
//!
//! Version handling is deliberately crude: the declared version string is
//! reduced to digits and dots and the first segment is taken as the major
//! version. Ranges (`^`, `~`), tags and malformed strings are not understood;
//! a string with no numeric first segment is simply not checked.

use std::path::Path;

use crate::models::constants::{MANIFEST_FILE, REACT_NATIVE_VERSION_FLOOR};
use crate::models::{AnalysisReport, Category, Finding, PackageManifest, Severity};

/// The core framework package whose version is checked.
pub const CORE_PACKAGE: &str = "react-native";

/// A package that has been superseded and what to move to.
#[derive(Debug, Clone, Copy)]
pub struct DeprecatedPackage {
    pub name: &'static str,
    pub replacement: &'static str,
}

pub static DEPRECATED_PACKAGES: &[DeprecatedPackage] = &[
    DeprecatedPackage {
        name: "@react-native-community/async-storage",
        replacement: "@react-native-async-storage/async-storage",
    },
    DeprecatedPackage {
        name: "@react-native-community/picker",
        replacement: "@react-native-picker/picker",
    },
    DeprecatedPackage {
        name: "@react-native-community/viewpager",
        replacement: "react-native-pager-view",
    },
    DeprecatedPackage {
        name: "@react-native-community/masked-view",
        replacement: "@react-native-masked-view/masked-view",
    },
    DeprecatedPackage {
        name: "@react-native-community/cameraroll",
        replacement: "@react-native-camera-roll/camera-roll",
    },
    DeprecatedPackage {
        name: "react-native-camera",
        replacement: "react-native-vision-camera",
    },
    DeprecatedPackage {
        name: "react-navigation",
        replacement: "@react-navigation/native",
    },
    DeprecatedPackage {
        name: "tipsi-stripe",
        replacement: "@stripe/stripe-react-native",
    },
];

/// Major version as the checker understands it.
///
/// All characters other than ASCII digits and `.` are removed, then the part
/// before the first `.` is parsed. Returns `None` when that part is empty or
/// does not fit in a `u64`.
pub fn parse_major(version: &str) -> Option<u64> {
    let cleaned: String = version
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.split('.').next()?.parse().ok()
}

/// Upgrade findings for a project root; a missing or invalid manifest yields none.
pub fn check_project(root: &Path) -> Vec<Finding> {
    PackageManifest::load(root)
        .map(|manifest| check_manifest(&manifest))
        .unwrap_or_default()
}

/// Stand-alone report for the manifest check. The manifest counts as the one
/// analyzed file when it could be loaded.
pub fn project_report(root: &Path) -> AnalysisReport {
    let mut report = AnalysisReport::new(root.display().to_string());
    if let Some(manifest) = PackageManifest::load(root) {
        report.total_files = 1;
        report.extend(check_manifest(&manifest));
    }
    report
}

/// Upgrade findings for a parsed manifest.
pub fn check_manifest(manifest: &PackageManifest) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(declared) = manifest.version_of(CORE_PACKAGE) {
        match parse_major(declared) {
            Some(major) if major < REACT_NATIVE_VERSION_FLOOR => findings.push(finding(
                Severity::High,
                format!(
                    "{CORE_PACKAGE} {declared} is below the supported floor (major {major} < {REACT_NATIVE_VERSION_FLOOR})"
                ),
                format!(
                    "Upgrade {CORE_PACKAGE} to {REACT_NATIVE_VERSION_FLOOR} or newer, stepping through the React Native Upgrade Helper"
                ),
            )),
            Some(_) => {}
            None => {
                tracing::debug!(version = declared, "unparseable core version, not checked");
            }
        }
    }

    for package in DEPRECATED_PACKAGES {
        if manifest.declares(package.name) {
            findings.push(finding(
                Severity::Medium,
                format!("Deprecated package `{}`", package.name),
                format!("Migrate to {}", package.replacement),
            ));
        }
    }

    if !has_lint_config(manifest) {
        findings.push(finding(
            Severity::Medium,
            "No ESLint configuration dependency",
            "Add eslint with @react-native/eslint-config to catch issues before review",
        ));
    }

    findings
}

fn has_lint_config(manifest: &PackageManifest) -> bool {
    manifest
        .package_names()
        .any(|name| name == "eslint" || name.contains("eslint-config"))
}

fn finding(severity: Severity, message: impl Into<String>, suggestion: impl Into<String>) -> Finding {
    Finding::new(
        MANIFEST_FILE,
        Category::Upgrades,
        severity,
        message,
        suggestion,
    )
}
