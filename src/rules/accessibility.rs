//! Accessibility rules for interactive elements, images and text scaling.

use std::sync::LazyLock;

use super::table::{Check, RuleTable, TextRule};
use crate::models::{Category, Finding, ScanTarget, Severity};

/// Opening tags of elements that respond to touches.
pub const INTERACTIVE_ELEMENT: &str =
    r"<(TouchableOpacity|TouchableHighlight|TouchableWithoutFeedback|TouchableNativeFeedback|Pressable)\b";

pub static RULES: &[TextRule] = &[
    TextRule {
        id: "interactive-label",
        check: Check::Missing {
            trigger: INTERACTIVE_ELEMENT,
            unless: &[r"accessibilityLabel", r"aria-label"],
        },
        severity: Severity::Medium,
        message: "Touchable element without accessibilityLabel",
        suggestion: "Describe the action with accessibilityLabel so screen readers can announce it",
    },
    TextRule {
        id: "image-label",
        check: Check::Missing {
            trigger: r"<Image\b",
            unless: &[r"accessibilityLabel", r"\balt="],
        },
        severity: Severity::Medium,
        message: "Image without accessibilityLabel",
        suggestion: "Add accessibilityLabel to meaningful images, or accessible={false} for decorative ones",
    },
    TextRule {
        id: "interactive-role",
        check: Check::Missing {
            trigger: INTERACTIVE_ELEMENT,
            unless: &[r"accessibilityRole", r"\brole="],
        },
        severity: Severity::Low,
        message: "Touchable element without accessibilityRole",
        suggestion: "Set accessibilityRole (e.g. \"button\", \"link\") so assistive tech knows how to treat it",
    },
    TextRule {
        id: "font-scaling",
        check: Check::Missing {
            trigger: r"fontSize\s*:",
            unless: &[r"allowFontScaling", r"maxFontSizeMultiplier"],
        },
        severity: Severity::Low,
        message: "Explicit fontSize without font scaling configuration",
        suggestion: "Keep allowFontScaling enabled and cap it with maxFontSizeMultiplier where layouts are tight",
    },
];

static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(Category::Accessibility, RULES));

pub fn evaluate(target: &ScanTarget) -> Vec<Finding> {
    TABLE.evaluate(target)
}
