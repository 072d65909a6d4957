use serde::Serialize;
use std::collections::BTreeMap;

use super::{Category, Finding, Severity};

/// Categories whose high and critical findings are promoted to the priority
/// section of a report, in display order.
pub const PRIORITY_CATEGORIES: [Category; 3] = [
    Category::Security,
    Category::Deprecated,
    Category::Performance,
];

/// Aggregate result of one scan.
///
/// Within a category, findings keep insertion order: file traversal order,
/// then rule order within the file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    /// Root the scan ran against, as given by the caller.
    pub root: String,
    pub total_files: usize,
    findings_by_category: BTreeMap<Category, Vec<Finding>>,
}

impl AnalysisReport {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings_by_category
            .entry(finding.category())
            .or_default()
            .push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// Findings recorded for one category, in insertion order.
    pub fn findings(&self, category: Category) -> &[Finding] {
        self.findings_by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every finding, grouped by category in canonical category order.
    pub fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings_by_category.values().flatten()
    }

    pub fn count(&self, category: Category) -> usize {
        self.findings(category).len()
    }

    pub fn total_findings(&self) -> usize {
        self.findings_by_category.values().map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }

    /// Number of findings per severity; severities without findings are omitted.
    pub fn counts_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for finding in self.all_findings() {
            *counts.entry(finding.severity()).or_insert(0) += 1;
        }
        counts
    }

    /// High and critical findings from the priority categories, in
    /// [`PRIORITY_CATEGORIES`] order.
    pub fn priority_findings(&self) -> Vec<&Finding> {
        PRIORITY_CATEGORIES
            .iter()
            .flat_map(|category| self.findings(*category))
            .filter(|finding| finding.severity().is_priority())
            .collect()
    }

    /// Drop findings below `min`.
    pub fn retain_min_severity(&mut self, min: Severity) {
        for findings in self.findings_by_category.values_mut() {
            findings.retain(|finding| finding.severity() >= min);
        }
        self.findings_by_category
            .retain(|_, findings| !findings.is_empty());
    }
}
