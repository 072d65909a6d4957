//! Code quality rules: oversized functions and props, hard-to-read
//! expressions and unhandled network calls.

use regex::Regex;
use std::sync::LazyLock;

use super::structure::{brace_blocks, count_members};
use super::table::{Check, RuleTable, TextRule};
use crate::models::constants::{MAX_FUNCTION_LINES, MAX_MAGIC_NUMBERS, MAX_PROPS_MEMBERS};
use crate::models::{Category, Finding, ScanTarget, Severity};

pub static RULES: &[TextRule] = &[
    TextRule {
        id: "unhandled-network-call",
        check: Check::Missing {
            trigger: r"\bfetch\s*\(|\baxios\b",
            unless: &[r"\bcatch\b", r"\btry\s*\{"],
        },
        severity: Severity::Medium,
        message: "Network call without error handling",
        suggestion: "Wrap requests in try/catch (or .catch) and surface failures to the user",
    },
    TextRule {
        id: "nested-ternary",
        check: Check::Present(r"\?\s[^?:;\n]+\s:\s[^;\n]*\?\s[^?:;\n]+\s:"),
        severity: Severity::Low,
        message: "Nested ternary expression",
        suggestion: "Replace nested ternaries with early returns, a lookup object or a small component",
    },
    TextRule {
        id: "magic-numbers",
        check: Check::Exceeds {
            pattern: r"\b\d{2,}\b",
            limit: MAX_MAGIC_NUMBERS,
        },
        severity: Severity::Low,
        message: "{count} magic numbers",
        suggestion: "Extract repeated numeric values into named constants or theme tokens",
    },
    TextRule {
        id: "console-statements",
        check: Check::Present(r"\bconsole\.(log|warn|error|debug|info)\s*\("),
        severity: Severity::Low,
        message: "Console statements left in code",
        suggestion: "Remove console output or route it through a logger stripped from release builds",
    },
    TextRule {
        id: "any-type",
        check: Check::Present(r":\s*any\b"),
        severity: Severity::Low,
        message: "Use of the `any` type",
        suggestion: "Replace `any` with a concrete type or `unknown` plus narrowing",
    },
];

static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(Category::CodeQuality, RULES));

static FUNCTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"function\s+(\w+)\s*\([^)]*\)[^{]*\{|(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s*)?(?:\([^)]*\)|\w+)\s*(?::[^=]*)?=>\s*\{",
    )
    .expect("Invalid function start pattern")
});

static PROPS_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(?:interface\s+(\w*Props)\b[^{]*|type\s+(\w*Props)\s*=\s*)\{(.*?)\}",
    )
    .expect("Invalid props type pattern")
});

pub fn evaluate(target: &ScanTarget) -> Vec<Finding> {
    let mut findings = long_functions(target);
    findings.extend(large_props(target));
    findings.extend(TABLE.evaluate(target));
    findings
}

fn long_functions(target: &ScanTarget) -> Vec<Finding> {
    brace_blocks(&target.content, &FUNCTION_START)
        .into_iter()
        .filter(|block| block.line_count > MAX_FUNCTION_LINES)
        .map(|block| {
            let name = block.name.as_deref().unwrap_or("anonymous");
            Finding::new(
                target.path.clone(),
                Category::CodeQuality,
                Severity::Medium,
                format!(
                    "Function `{name}` is {} lines long (line {})",
                    block.line_count, block.start_line
                ),
                format!(
                    "Split functions longer than {MAX_FUNCTION_LINES} lines into smaller helpers or hooks"
                ),
            )
        })
        .collect()
}

fn large_props(target: &ScanTarget) -> Vec<Finding> {
    PROPS_TYPE
        .captures_iter(&target.content)
        .filter_map(|caps| {
            let name = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let members = count_members(caps.get(3)?.as_str());
            (members > MAX_PROPS_MEMBERS).then(|| {
                Finding::new(
                    target.path.clone(),
                    Category::CodeQuality,
                    Severity::Medium,
                    format!("`{name}` declares {members} props"),
                    "Group related props into objects or split the component",
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str) -> Vec<Finding> {
        evaluate(&ScanTarget::new("src/Screen.tsx", content))
    }

    fn function_with_body(lines: usize) -> String {
        let body: String = (0..lines).map(|i| format!("  step{i}();\n")).collect();
        format!("function render() {{\n{body}}}\n")
    }

    #[test]
    fn test_table_compiles() {
        assert_eq!(TABLE.len(), RULES.len());
        LazyLock::force(&FUNCTION_START);
        LazyLock::force(&PROPS_TYPE);
    }

    #[test]
    fn test_long_function_threshold() {
        // 48 body lines + open + close = 50 lines: not reported
        assert!(run(&function_with_body(48)).is_empty());

        let findings = run(&function_with_body(49));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Medium);
        assert!(findings[0].message().contains("`render` is 51 lines"));
    }

    #[test]
    fn test_long_arrow_function() {
        let body: String = (0..60).map(|i| format!("  step{i}();\n")).collect();
        let content = format!("const Screen = ({{ title }}: Props) => {{\n{body}}};\n");
        let findings = run(&content);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message().contains("`Screen`"));
    }

    #[test]
    fn test_large_props_interface() {
        let members: String = (0..11).map(|i| format!("  field{i}: string;\n")).collect();
        let findings = run(&format!("interface CardProps {{\n{members}}}\n"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message(), "`CardProps` declares 11 props");

        let members: String = (0..10).map(|i| format!("  field{i}: string;\n")).collect();
        assert!(run(&format!("type CardProps = {{\n{members}}};\n")).is_empty());
    }

    #[test]
    fn test_fetch_without_error_handling() {
        let findings = run("const load = async () => { const r = await fetch(url); };");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message(), "Network call without error handling");

        let handled = "try { await fetch(url); } catch (e) { report(e); }";
        assert!(run(handled).is_empty());
    }

    #[test]
    fn test_nested_ternary() {
        let findings = run("const c = a ? x : b ? y : z;");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Low);
        assert!(run("const c = a ? x : y;").is_empty());
    }

    #[test]
    fn test_magic_numbers() {
        assert!(run("const a = 10, b = 20, c = 30;").is_empty());
        let findings = run("const a = 10, b = 20, c = 30, d = 40;");
        assert_eq!(findings[0].message(), "4 magic numbers");
    }

    #[test]
    fn test_optional_props_are_not_ternaries() {
        assert!(run("interface P { a?: string; b?: number; }").is_empty());
    }
}
