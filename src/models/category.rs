use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analysis dimension a finding belongs to.
///
/// Declaration order is the canonical ordering used when findings are stored
/// per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Security,
    Performance,
    CodeQuality,
    Refactoring,
    Deprecated,
    Accessibility,
    Testing,
    /// Manifest-level checks; never produced by a per-file rule.
    Upgrades,
}

impl Category {
    /// Categories evaluated against each source file.
    pub const FILE_RULES: [Category; 7] = [
        Category::Security,
        Category::Performance,
        Category::CodeQuality,
        Category::Refactoring,
        Category::Deprecated,
        Category::Accessibility,
        Category::Testing,
    ];

    /// Every category, file rules first.
    pub const ALL: [Category; 8] = [
        Category::Security,
        Category::Performance,
        Category::CodeQuality,
        Category::Refactoring,
        Category::Deprecated,
        Category::Accessibility,
        Category::Testing,
        Category::Upgrades,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Security => "security",
            Category::Performance => "performance",
            Category::CodeQuality => "code_quality",
            Category::Refactoring => "refactoring",
            Category::Deprecated => "deprecated",
            Category::Accessibility => "accessibility",
            Category::Testing => "testing",
            Category::Upgrades => "upgrades",
        }
    }

    /// Heading used for the category's report section.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::CodeQuality => "Code Quality",
            Category::Refactoring => "Refactoring Opportunities",
            Category::Deprecated => "Deprecated APIs",
            Category::Accessibility => "Accessibility",
            Category::Testing => "Testing Gaps",
            Category::Upgrades => "Upgrades",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "security" => Ok(Category::Security),
            "performance" => Ok(Category::Performance),
            "code_quality" | "code-quality" | "codequality" | "quality" => {
                Ok(Category::CodeQuality)
            }
            "refactoring" => Ok(Category::Refactoring),
            "deprecated" => Ok(Category::Deprecated),
            "accessibility" => Ok(Category::Accessibility),
            "testing" => Ok(Category::Testing),
            "upgrades" => Ok(Category::Upgrades),
            other => Err(format!("Unknown analysis category '{other}'")),
        }
    }
}
