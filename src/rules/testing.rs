//! Testing gaps: components without a test file, untargetable interactive
//! elements and typed props without runtime validation.

use std::sync::LazyLock;

use regex::Regex;

use super::accessibility::INTERACTIVE_ELEMENT;
use super::table::{Check, RuleTable, TextRule};
use super::ScanContext;
use crate::models::{Category, Finding, ScanTarget, Severity};

pub static RULES: &[TextRule] = &[
    TextRule {
        id: "missing-test-id",
        check: Check::Missing {
            trigger: INTERACTIVE_ELEMENT,
            unless: &[r"testID"],
        },
        severity: Severity::Low,
        message: "Interactive element without testID",
        suggestion: "Add testID props so tests and E2E tools (Detox, Maestro) can target the element",
    },
    TextRule {
        id: "unvalidated-props",
        check: Check::Missing {
            trigger: r"\b(interface|type)\s+\w*Props\b",
            unless: &[r"PropTypes", r"\bz\.object\s*\(", r"\byup\."],
        },
        severity: Severity::Low,
        message: "Typed props without runtime validation",
        suggestion: "Types vanish at runtime; validate external data (API responses, deep links) with zod or PropTypes",
    },
];

static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(Category::Testing, RULES));

pub fn evaluate(target: &ScanTarget, ctx: &ScanContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(test_stems) = ctx.test_stems {
        if is_component_file(target) && !test_stems.contains(target.stem()) {
            findings.push(Finding::new(
                target.path.clone(),
                Category::Testing,
                Severity::Low,
                format!("No test file found for `{}`", target.stem()),
                format!(
                    "Add {}.test.{} with @testing-library/react-native",
                    target.stem(),
                    target.extension().unwrap_or("tsx")
                ),
            ));
        }
    }

    findings.extend(TABLE.evaluate(target));
    findings
}

static EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*export\b").expect("Invalid export pattern"));

/// Class components, `FC` annotations and multi-line JSX return blocks.
static COMPONENT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bextends\s+(?:React\.)?(?:Pure)?Component\b|:\s*(?:React\.)?FC\b|\breturn\s*\(\s*\n\s*<",
    )
    .expect("Invalid component declaration pattern")
});

/// A file looks like a component when its name is capitalised and it exports
/// a component declaration. Name and extension alone are not enough: an empty
/// `App.tsx` or a one-line render helper is not flagged.
pub fn is_component_file(target: &ScanTarget) -> bool {
    let capitalised = target
        .stem()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase());
    capitalised
        && EXPORT.is_match(&target.content)
        && COMPONENT_DECLARATION.is_match(&target.content)
}
