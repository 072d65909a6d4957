//! Scan-level properties: determinism, exclusions, leniency and the mixed
//! three-file scenario.

use rn_advisor::analyzer::{analyze_codebase, analyze_source, AnalysisOptions};
use rn_advisor::models::constants::EXCLUDED_DIRS;
use rn_advisor::models::{AnalysisReport, Category, Finding, PackageManifest, Severity};
use rn_advisor::rules::deprecated::DEPRECATED_APIS;
use rn_advisor::upgrades::check_manifest;

use super::helpers::{files_of, in_category, mixed_project, project, write_file};

fn all_findings(report: &AnalysisReport) -> Vec<Finding> {
    report.all_findings().cloned().collect()
}

#[test]
fn test_rescan_is_identical() {
    let temp = project(&[
        ("App.tsx", "import React from 'react';\nconsole.log('x');\n<Image source={a} />\n"),
        ("src/screens/Home.tsx", "setInterval(tick, 1000);\n<FlatList data={d} />\n"),
        ("src/api/client.ts", "fetch('http://example.com/api');\nconst password = 'hunter2hunter2';\n"),
        ("src/legacy/Old.js", "import { ListView } from 'react-native';\ncomponentWillMount() {}\n"),
        ("src/b.js", "eval(code);\n"),
        ("src/a.js", "eval(code);\n"),
    ])
    .unwrap();

    let first = analyze_codebase(temp.path(), &AnalysisOptions::default());
    let second = analyze_codebase(temp.path(), &AnalysisOptions::default());

    assert_eq!(first.total_files, 6);
    assert!(!first.is_clean());
    assert_eq!(all_findings(&first), all_findings(&second));
}

#[test]
fn test_excluded_directories_never_reported() {
    let temp = project(&[("src/App.js", "eval(x);\n")]).unwrap();
    for dir in EXCLUDED_DIRS {
        write_file(temp.path(), &format!("{dir}/index.js"), "eval(x);\n").unwrap();
        write_file(temp.path(), &format!("src/{dir}/nested/deep.ts"), "eval(x);\n").unwrap();
    }

    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());

    assert_eq!(report.total_files, 1);
    for finding in report.all_findings() {
        for dir in EXCLUDED_DIRS {
            assert!(
                !finding.file().split('/').any(|part| part == dir),
                "{} is under excluded {dir}",
                finding.file()
            );
        }
    }
    assert_eq!(files_of(report.findings(Category::Security)), vec!["src/App.js"]);
}

#[test]
fn test_extension_filter_is_case_sensitive() {
    let temp = project(&[
        ("upper.JS", "eval(x);\n"),
        ("style.css", "eval(x);\n"),
        ("notes.md", "eval(x);\n"),
        ("ok.jsx", "eval(x);\n"),
    ])
    .unwrap();

    let report = analyze_codebase(temp.path(), &AnalysisOptions::only([Category::Security]));
    assert_eq!(report.total_files, 1);
    assert_eq!(files_of(report.findings(Category::Security)), vec!["ok.jsx"]);
}

#[test]
fn test_missing_root_yields_empty_report() {
    let temp = project(&[]).unwrap();
    let report = analyze_codebase(&temp.path().join("nope"), &AnalysisOptions::default());
    assert_eq!(report.total_files, 0);
    assert!(report.is_clean());
}

#[test]
fn test_undecodable_file_is_skipped_and_not_counted() {
    let temp = project(&[("good.js", "eval(x);\n")]).unwrap();
    std::fs::write(temp.path().join("binary.js"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let report = analyze_codebase(temp.path(), &AnalysisOptions::only([Category::Security]));
    assert_eq!(report.total_files, 1);
    assert_eq!(report.count(Category::Security), 1);
}

#[test]
fn test_invalid_manifest_is_not_an_error() {
    let temp = project(&[("package.json", "{ not json"), ("index.js", "")]).unwrap();
    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());
    assert_eq!(report.count(Category::Upgrades), 0);
    assert_eq!(report.total_files, 1);
}

#[test]
fn test_mixed_scenario() {
    let temp = mixed_project().unwrap();
    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());
    let findings = all_findings(&report);

    // The test file is not an analysis target
    assert_eq!(report.total_files, 2);
    assert!(findings.iter().all(|f| !f.file().contains("Foo.test")));

    let security = in_category(&findings, Category::Security);
    assert_eq!(security.len(), 1);
    assert_eq!(security[0].file(), "src/Config.ts");
    assert_eq!(security[0].severity(), Severity::Critical);

    let key_findings: Vec<_> = in_category(&findings, Category::Performance)
        .into_iter()
        .filter(|f| f.message().contains("keyExtractor"))
        .collect();
    assert_eq!(key_findings.len(), 1);
    assert_eq!(key_findings[0].file(), "src/Feed.tsx");

    assert!(in_category(&findings, Category::Testing).is_empty());
}

#[test]
fn test_component_with_sibling_test_is_not_flagged() {
    let component = "export default function X() {\n  return (\n    <View />\n  );\n}\n";
    let temp = project(&[
        ("src/Foo.tsx", component),
        ("src/Foo.test.tsx", "it('renders', () => {});\n"),
        ("src/Bar.tsx", component),
        ("src/__tests__/Baz.spec.tsx", "it('renders', () => {});\n"),
        ("src/Baz.tsx", component),
    ])
    .unwrap();

    let report = analyze_codebase(temp.path(), &AnalysisOptions::only([Category::Testing]));
    let missing: Vec<_> = report
        .findings(Category::Testing)
        .iter()
        .filter(|f| f.message().starts_with("No test file found"))
        .map(Finding::file)
        .collect();

    assert_eq!(missing, vec!["src/Bar.tsx"]);
}

#[test]
fn test_empty_capitalised_files_stay_clean() {
    let temp = project(&[("App.tsx", ""), ("src/Button.jsx", ""), ("src/Button.test.jsx", "")]).unwrap();
    let report = analyze_codebase(temp.path(), &AnalysisOptions::default());

    assert_eq!(report.total_files, 2);
    assert!(report.is_clean(), "{:?}", all_findings(&report));
}

#[test]
fn test_manifest_floor_threshold() {
    for (version, flagged) in [
        ("60.0.0", true),
        ("69.9.9", true),
        ("70.0.0", false),
        ("75.0.0", false),
    ] {
        let manifest = PackageManifest::from_json(&format!(
            r#"{{ "dependencies": {{ "react-native": "{version}" }},
                 "devDependencies": {{ "eslint": "^9.0.0" }} }}"#
        ))
        .unwrap();
        let findings = check_manifest(&manifest);
        let high: Vec<_> = findings
            .iter()
            .filter(|f| f.severity() == Severity::High)
            .collect();
        assert_eq!(!high.is_empty(), flagged, "version {version}");
        if flagged {
            assert!(high[0].suggestion().contains("70"));
        }
    }
}

#[test]
fn test_deprecated_table_completeness() {
    for api in DEPRECATED_APIS {
        let report = analyze_source(
            "Legacy.js",
            api.name,
            &AnalysisOptions::only([Category::Deprecated]),
        );
        let findings = report.findings(Category::Deprecated);

        assert_eq!(findings.len(), 1, "{}", api.name);
        assert!(findings[0].message().contains(api.name));
        assert!(findings[0].suggestion().contains(api.replacement));
        assert_eq!(findings[0].severity(), api.severity);
    }
}

#[test]
fn test_min_severity_filter() {
    let temp = mixed_project().unwrap();
    let options = AnalysisOptions {
        categories: None,
        min_severity: Some(Severity::Critical),
    };
    let report = analyze_codebase(temp.path(), &options);

    assert!(report
        .all_findings()
        .all(|f| f.severity() == Severity::Critical));
    assert_eq!(report.total_findings(), 1);
}
