//! Report rendering.
//!
//! The text format is Markdown aimed at an AI assistant reading the output:
//! summary counts first, then the priority section, then one section per
//! category, then a fixed list of next steps. The formatter trusts each
//! finding's stored severity and never re-derives it.

pub mod json;

use std::fmt::{self, Write};

use crate::models::{AnalysisReport, Category, Finding, Severity};
use crate::utils::plural;

pub use json::to_json;

pub const COMPREHENSIVE_TITLE: &str = "React Native Codebase Analysis";
pub const PERFORMANCE_TITLE: &str = "React Native Performance Analysis";
pub const COMPONENT_TITLE: &str = "React Native Component Analysis";
pub const UPGRADES_TITLE: &str = "React Native Upgrade Check";

/// Body of a report with no findings at all.
pub const NO_ISSUES_MESSAGE: &str =
    "No issues found. The analyzed code follows the checked React Native best practices.";

/// Category sections in display order.
pub const SECTION_ORDER: [Category; 8] = [
    Category::Security,
    Category::Performance,
    Category::Deprecated,
    Category::CodeQuality,
    Category::Refactoring,
    Category::Accessibility,
    Category::Testing,
    Category::Upgrades,
];

pub const NEXT_STEPS: [&str; 6] = [
    "Fix the critical and high priority issues first, starting with security.",
    "Replace deprecated APIs before the next React Native upgrade.",
    "Address performance issues in frequently rendered screens and lists.",
    "Add tests for untested components and testIDs for interactive elements.",
    "Check accessibility labels and roles with VoiceOver and TalkBack.",
    "Re-run this analysis after the changes to track progress.",
];

/// Render a report as Markdown text.
pub fn format_report(report: &AnalysisReport, title: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report, title);
    out
}

/// Write a report as Markdown into `w`.
pub fn write_report<W: Write>(w: &mut W, report: &AnalysisReport, title: &str) -> fmt::Result {
    writeln!(w, "# {title}\n")?;
    writeln!(w, "**Path:** `{}`", report.root)?;
    writeln!(w, "**Files analyzed:** {}\n", report.total_files)?;

    if report.is_clean() {
        return writeln!(w, "{NO_ISSUES_MESSAGE}");
    }

    write_summary(w, report)?;
    write_priority(w, report)?;
    for category in SECTION_ORDER {
        write_category(w, category, report.findings(category))?;
    }
    write_next_steps(w)
}

fn write_summary<W: Write>(w: &mut W, report: &AnalysisReport) -> fmt::Result {
    let counts = report.counts_by_severity();
    let breakdown: Vec<String> = Severity::DESCENDING
        .iter()
        .filter_map(|severity| {
            counts
                .get(severity)
                .map(|count| format!("{count} {severity}"))
        })
        .collect();

    writeln!(w, "## Summary\n")?;
    writeln!(
        w,
        "**Total issues:** {} ({})\n",
        report.total_findings(),
        breakdown.join(", ")
    )?;
    writeln!(w, "| Category | Issues |")?;
    writeln!(w, "|---|---|")?;
    for category in SECTION_ORDER {
        let count = report.count(category);
        if count > 0 {
            writeln!(w, "| {} | {count} |", category.title())?;
        }
    }
    writeln!(w)
}

fn write_priority<W: Write>(w: &mut W, report: &AnalysisReport) -> fmt::Result {
    let priority = report.priority_findings();
    if priority.is_empty() {
        return Ok(());
    }

    writeln!(w, "## Critical & High Priority\n")?;
    for (index, finding) in priority.iter().enumerate() {
        writeln!(
            w,
            "{}. **[{}]** {} in `{}`: {}",
            index + 1,
            finding.severity().label(),
            finding.category().title(),
            finding.file(),
            finding.message()
        )?;
        writeln!(w, "   Fix: {}", finding.suggestion())?;
    }
    writeln!(w)
}

fn write_category<W: Write>(w: &mut W, category: Category, findings: &[Finding]) -> fmt::Result {
    if findings.is_empty() {
        return Ok(());
    }

    writeln!(
        w,
        "## {} ({})\n",
        category.title(),
        plural(findings.len(), "issue", "issues")
    )?;
    for finding in findings {
        writeln!(
            w,
            "- **[{}]** `{}`: {}",
            finding.severity().label(),
            finding.file(),
            finding.message()
        )?;
        writeln!(w, "  - Suggestion: {}", finding.suggestion())?;
    }
    writeln!(w)
}

fn write_next_steps<W: Write>(w: &mut W) -> fmt::Result {
    writeln!(w, "## Next Steps\n")?;
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        writeln!(w, "{}. {step}", index + 1)?;
    }
    Ok(())
}
