//! Rendered report properties.

use rn_advisor::analyzer::{analyze_codebase, AnalysisOptions};
use rn_advisor::models::report::PRIORITY_CATEGORIES;
use rn_advisor::models::Severity;
use rn_advisor::report::{format_report, to_json, COMPREHENSIVE_TITLE, NEXT_STEPS, NO_ISSUES_MESSAGE};

use super::helpers::{mixed_project, project};

#[test]
fn test_clean_tree_reports_only_no_issues() {
    let temp = project(&[
        ("empty.js", ""),
        ("App.tsx", ""),
        ("lib/util.ts", ""),
        ("lib/Also.jsx", ""),
    ])
    .unwrap();

    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());
    let text = format_report(&report, COMPREHENSIVE_TITLE);

    assert_eq!(report.total_files, 4);
    assert!(text.ends_with(&format!("{NO_ISSUES_MESSAGE}\n")));
    assert!(!text.contains("## "));
    assert!(!text.contains("Next Steps"));
}

#[test]
fn test_priority_section_holds_only_high_priority_findings() {
    let temp = project(&[
        ("src/Api.js", "eval(x);\nfetch('http://api.test');\n"),
        ("src/Timer.js", "setInterval(tick, 10);\n"),
        ("src/Old.js", "React.createClass({});\nDatePickerIOS\n"),
        ("src/Big.js", "console.log(a);\nconst x: any = 1;\n"),
    ])
    .unwrap();
    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());

    let priority = report.priority_findings();
    assert!(!priority.is_empty());
    for finding in &priority {
        assert!(finding.severity() >= Severity::High);
        assert!(PRIORITY_CATEGORIES.contains(&finding.category()));
    }

    let text = format_report(&report, COMPREHENSIVE_TITLE);
    let start = text.find("## Critical & High Priority").unwrap();
    let section = &text[start..];
    let section = &section[..section[3..].find("\n## ").map(|i| i + 3).unwrap_or(section.len())];
    let items: Vec<&str> = section.lines().filter(|l| l.contains("**[")).collect();

    assert_eq!(items.len(), priority.len());
    for item in items {
        assert!(item.contains("[CRITICAL]") || item.contains("[HIGH]"), "{item}");
        assert!(!item.contains("[MEDIUM]") && !item.contains("[LOW]"));
    }
}

#[test]
fn test_full_report_layout() {
    let temp = mixed_project().unwrap();
    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());
    let text = format_report(&report, COMPREHENSIVE_TITLE);

    assert!(text.contains("**Files analyzed:** 2"));
    let summary = text.find("## Summary").unwrap();
    let security = text.find("## Security").unwrap();
    let performance = text.find("## Performance").unwrap();
    let steps = text.find("## Next Steps").unwrap();
    assert!(summary < security && security < performance && performance < steps);
    for step in NEXT_STEPS {
        assert!(text.contains(step));
    }
}

#[test]
fn test_json_matches_report() {
    let temp = mixed_project().unwrap();
    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());
    let value = to_json(&report).unwrap();

    assert_eq!(value["total_files"], 2);
    assert_eq!(value["total_findings"], report.total_findings());
    assert_eq!(
        value["findings_by_category"]["security"][0]["file"],
        "src/Config.ts"
    );
    assert_eq!(value["counts_by_severity"]["critical"], 1);
}
