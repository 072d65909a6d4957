//! Rule evaluators, one module per analysis category.
//!
//! Every evaluator is a pure function of a [`ScanTarget`] (plus, for the
//! testing rules, the names of test files seen during the scan). Evaluators
//! share no state and can run in any order.

pub mod accessibility;
pub mod code_quality;
pub mod deprecated;
pub mod performance;
pub mod refactoring;
pub mod security;
pub mod structure;
pub mod table;
pub mod testing;

use std::collections::BTreeSet;

use crate::models::{Category, Finding, ScanTarget};

/// Scan-wide facts available to rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanContext<'a> {
    /// Stems of test files found in the scanned tree. `None` when the file is
    /// analysed without a directory (e.g. pasted component code), which turns
    /// the missing-test rule off.
    pub test_stems: Option<&'a BTreeSet<String>>,
}

impl<'a> ScanContext<'a> {
    pub fn with_test_stems(test_stems: &'a BTreeSet<String>) -> Self {
        Self {
            test_stems: Some(test_stems),
        }
    }
}

/// Run one category's rules against a file.
///
/// `Upgrades` is manifest-level and yields nothing here.
pub fn evaluate(category: Category, target: &ScanTarget, ctx: &ScanContext<'_>) -> Vec<Finding> {
    match category {
        Category::Security => security::evaluate(target),
        Category::Performance => performance::evaluate(target),
        Category::CodeQuality => code_quality::evaluate(target),
        Category::Refactoring => refactoring::evaluate(target),
        Category::Deprecated => deprecated::evaluate(target),
        Category::Accessibility => accessibility::evaluate(target),
        Category::Testing => testing::evaluate(target, ctx),
        Category::Upgrades => Vec::new(),
    }
}

/// Run several categories against a file, in the order given.
pub fn evaluate_all(
    categories: &[Category],
    target: &ScanTarget,
    ctx: &ScanContext<'_>,
) -> Vec<Finding> {
    categories
        .iter()
        .flat_map(|category| evaluate(*category, target, ctx))
        .collect()
}
