//! Security rules: secrets in source, code injection sinks, sensitive logging
//! and plaintext transport.

use std::sync::LazyLock;

use super::table::{Check, RuleTable, TextRule};
use crate::models::{Category, Finding, ScanTarget, Severity};

pub static RULES: &[TextRule] = &[
    TextRule {
        id: "hardcoded-secret",
        check: Check::Present(
            r#"(?i)\b\w*(api[_-]?key|secret|password|passwd|access[_-]?token|auth[_-]?token|private[_-]?key)\w*\s*[:=]\s*['"`][^'"`\s]{8,}['"`]"#,
        ),
        severity: Severity::Critical,
        message: "Hardcoded secret or API key assigned in source",
        suggestion: "Move secrets to react-native-config or a backend, and keep tokens in react-native-keychain",
    },
    TextRule {
        id: "eval",
        check: Check::Present(r"\beval\s*\("),
        severity: Severity::Critical,
        message: "eval() executes arbitrary code",
        suggestion: "Remove eval(); parse data with JSON.parse or use explicit logic",
    },
    TextRule {
        id: "html-injection",
        check: Check::Present(r"dangerouslySetInnerHTML"),
        severity: Severity::Critical,
        message: "dangerouslySetInnerHTML injects unsanitised HTML",
        suggestion: "Render content with native components or sanitise the HTML before injecting it",
    },
    TextRule {
        id: "sensitive-logging",
        check: Check::Present(
            r"(?i)console\.(log|info|debug|warn)\([^)]*(password|token|secret|key)",
        ),
        severity: Severity::High,
        message: "Sensitive value written to the console",
        suggestion: "Remove logging of credentials and tokens; release builds keep console output in device logs",
    },
    TextRule {
        id: "insecure-storage",
        check: Check::Present(
            r#"(?i)AsyncStorage\.setItem\(\s*['"`][^'"`]*(token|password|secret)"#,
        ),
        severity: Severity::High,
        message: "Sensitive value stored in AsyncStorage (unencrypted)",
        suggestion: "Store credentials with react-native-keychain or expo-secure-store",
    },
    TextRule {
        id: "webview-any-origin",
        check: Check::Present(r#"originWhitelist=\{\s*\[\s*['"]\*['"]\s*\]\s*\}"#),
        severity: Severity::High,
        message: "WebView accepts navigation to any origin",
        suggestion: "Restrict originWhitelist to the domains the WebView needs",
    },
    TextRule {
        id: "insecure-transport",
        check: Check::Present(r#"(fetch|axios(\.\w+)?)\s*\(\s*['"`]http://"#),
        severity: Severity::Medium,
        message: "Network request over plaintext http://",
        suggestion: "Use https:// endpoints; iOS ATS and Android cleartext policies block http by default",
    },
];

static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(Category::Security, RULES));

pub fn evaluate(target: &ScanTarget) -> Vec<Finding> {
    TABLE.evaluate(target)
}
