//! Codebase analyzer that orchestrates enumeration, rule evaluation and the
//! manifest check into a single report.

use std::path::Path;

use crate::models::{AnalysisReport, Category, ScanTarget, Severity};
use crate::rules::{self, ScanContext};
use crate::scan::{self, WalkOptions};
use crate::upgrades;

/// What a scan should look at.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Categories to run; `None` runs every category including upgrades.
    pub categories: Option<Vec<Category>>,
    /// Drop findings below this severity.
    pub min_severity: Option<Severity>,
}

impl AnalysisOptions {
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: Some(categories.into_iter().collect()),
            min_severity: None,
        }
    }

    /// Selected per-file categories in canonical order, without duplicates.
    pub fn file_categories(&self) -> Vec<Category> {
        Category::FILE_RULES
            .into_iter()
            .filter(|category| self.includes(*category))
            .collect()
    }

    pub fn includes(&self, category: Category) -> bool {
        self.categories
            .as_ref()
            .is_none_or(|selected| selected.contains(&category))
    }
}

/// Analyze every eligible source file under `root`.
///
/// Never fails: missing roots, unreadable directories or files and a missing
/// or invalid manifest all shrink the report instead.
pub fn analyze_codebase(root: &Path, options: &AnalysisOptions) -> AnalysisReport {
    let mut report = AnalysisReport::new(root.display().to_string());
    let categories = options.file_categories();

    let enumeration = scan::enumerate(root, &WalkOptions::default());
    let ctx = ScanContext::with_test_stems(&enumeration.test_stems);
    tracing::debug!(
        root = %root.display(),
        files = enumeration.files.len(),
        test_files = enumeration.test_stems.len(),
        "enumerated scan targets"
    );

    for target in enumeration.targets() {
        report.total_files += 1;
        report.extend(rules::evaluate_all(&categories, &target, &ctx));
    }

    if options.includes(Category::Upgrades) {
        report.extend(upgrades::check_project(root));
    }

    if let Some(min) = options.min_severity {
        report.retain_min_severity(min);
    }

    tracing::info!(
        files = report.total_files,
        findings = report.total_findings(),
        "analysis complete"
    );
    report
}

/// Analyze source text that is not on disk, such as a pasted component.
///
/// The missing-test rule needs a directory and is skipped; upgrades are
/// manifest-level and never apply.
pub fn analyze_source(file_name: &str, content: &str, options: &AnalysisOptions) -> AnalysisReport {
    let mut report = AnalysisReport::new(file_name);
    let target = ScanTarget::new(file_name, content);

    report.total_files = 1;
    report.extend(rules::evaluate_all(
        &options.file_categories(),
        &target,
        &ScanContext::default(),
    ));

    if let Some(min) = options.min_severity {
        report.retain_min_severity(min);
    }
    report
}
