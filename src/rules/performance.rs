//! Performance rules: list virtualisation hints and timers or listeners that
//! are never torn down.

use std::sync::LazyLock;

use super::table::{Check, RuleTable, TextRule};
use crate::models::{Category, Finding, ScanTarget, Severity};

pub static RULES: &[TextRule] = &[
    TextRule {
        id: "interval-not-cleared",
        check: Check::Missing {
            trigger: r"\bsetInterval\s*\(",
            unless: &[r"\bclearInterval\s*\("],
        },
        severity: Severity::High,
        message: "setInterval without a matching clearInterval",
        suggestion: "Clear the interval in the effect cleanup (return () => clearInterval(id))",
    },
    TextRule {
        id: "event-listener-not-removed",
        check: Check::Missing {
            trigger: r"\baddEventListener\s*\(",
            unless: &[r"\bremoveEventListener\s*\("],
        },
        severity: Severity::High,
        message: "addEventListener without a matching removeEventListener",
        suggestion: "Remove the listener in the effect cleanup or componentWillUnmount",
    },
    TextRule {
        id: "subscription-not-removed",
        check: Check::Missing {
            trigger: r"\.addListener\s*\(",
            unless: &[
                r"\.remove\s*\(\s*\)",
                r"\bremoveListener\s*\(",
                r"\bremoveAllListeners\s*\(",
            ],
        },
        severity: Severity::High,
        message: "addListener subscription is never removed",
        suggestion: "Keep the returned subscription and call subscription.remove() on cleanup",
    },
    TextRule {
        id: "flatlist-key-extractor",
        check: Check::Missing {
            trigger: r"<FlatList\b",
            unless: &[r"keyExtractor"],
        },
        severity: Severity::Medium,
        message: "FlatList without keyExtractor",
        suggestion: "Provide keyExtractor returning a stable unique id so rows are not re-created",
    },
    TextRule {
        id: "scrollview-map",
        check: Check::Present(r"(?s)<ScrollView\b.*?\.map\("),
        severity: Severity::Medium,
        message: "ScrollView renders a mapped collection",
        suggestion: "Use FlatList or SectionList so long collections are virtualised",
    },
    TextRule {
        id: "flatlist-item-layout",
        check: Check::Missing {
            trigger: r"<FlatList\b",
            unless: &[r"getItemLayout"],
        },
        severity: Severity::Low,
        message: "FlatList without getItemLayout",
        suggestion: "Add getItemLayout when rows have a fixed height to skip layout measurement",
    },
    TextRule {
        id: "clipped-subviews",
        check: Check::Missing {
            trigger: r"<(FlatList|SectionList|VirtualizedList)\b",
            unless: &[r"removeClippedSubviews"],
        },
        severity: Severity::Low,
        message: "List without removeClippedSubviews",
        suggestion: "Set removeClippedSubviews on long lists to recycle off-screen views",
    },
    TextRule {
        id: "inline-render-item",
        check: Check::Present(r"renderItem=\{\s*(\(|\w+\s*=>)"),
        severity: Severity::Low,
        message: "renderItem is an inline function",
        suggestion: "Hoist renderItem into a useCallback or a memoised component",
    },
];

static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(Category::Performance, RULES));

pub fn evaluate(target: &ScanTarget) -> Vec<Finding> {
    TABLE.evaluate(target)
}
