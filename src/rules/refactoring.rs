//! Refactoring opportunities: duplicated imports, oversized effects, inline
//! styling and prop-heavy JSX.

use regex::Regex;
use std::sync::LazyLock;

use super::structure::{brace_blocks, duplicate_imports};
use super::table::{Check, RuleTable, TextRule};
use crate::models::constants::{MAX_EFFECT_LINES, MAX_INLINE_PROP_FUNCTIONS};
use crate::models::{Category, Finding, ScanTarget, Severity};

pub static RULES: &[TextRule] = &[
    TextRule {
        id: "inline-styles",
        check: Check::Missing {
            trigger: r"style=\{\{",
            unless: &[r"StyleSheet\.create"],
        },
        severity: Severity::Low,
        message: "Inline style objects without StyleSheet.create",
        suggestion: "Move styles into StyleSheet.create (or the shared theme) so they are created once",
    },
    TextRule {
        id: "complex-condition",
        check: Check::Present(r"&&[^&\n]*&&"),
        severity: Severity::Low,
        message: "Condition chains three or more && operands",
        suggestion: "Name the condition with a well-named boolean or helper function",
    },
    TextRule {
        id: "inline-prop-functions",
        check: Check::Exceeds {
            pattern: r"\w+=\{\s*(?:async\s*)?\([^)]*\)\s*=>",
            limit: MAX_INLINE_PROP_FUNCTIONS,
        },
        severity: Severity::Low,
        message: "{count} inline arrow functions passed as props",
        suggestion: "Extract handlers with useCallback to keep props referentially stable",
    },
];

static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(Category::Refactoring, RULES));

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*import\s[^;]*?from\s+['"]([^'"]+)['"]"#)
        .expect("Invalid import pattern")
});

static EFFECT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\buse(?:Layout)?Effect\s*\(").expect("Invalid effect pattern"));

pub fn evaluate(target: &ScanTarget) -> Vec<Finding> {
    let mut findings: Vec<Finding> = duplicate_imports(&target.content, &IMPORT)
        .into_iter()
        .map(|(source, count)| {
            Finding::new(
                target.path.clone(),
                Category::Refactoring,
                Severity::Medium,
                format!("'{source}' is imported {count} times"),
                "Merge the imports from this module into a single statement",
            )
        })
        .collect();

    findings.extend(
        brace_blocks(&target.content, &EFFECT_START)
            .into_iter()
            .filter(|block| block.line_count > MAX_EFFECT_LINES)
            .map(|block| {
                Finding::new(
                    target.path.clone(),
                    Category::Refactoring,
                    Severity::Medium,
                    format!(
                        "Effect at line {} spans {} lines",
                        block.start_line, block.line_count
                    ),
                    "Split the effect by concern or move the logic into a custom hook",
                )
            }),
    );

    findings.extend(TABLE.evaluate(target));
    findings
}
