use serde::{Deserialize, Serialize};

use super::{Category, Severity};

/// A single issue detected by a rule.
///
/// Findings are value objects: fields are only readable after construction and
/// nothing links back to the file content they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    file: String,
    category: Category,
    severity: Severity,
    message: String,
    suggestion: String,
}

impl Finding {
    pub fn new(
        file: impl Into<String>,
        category: Category,
        severity: Severity,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            category,
            severity,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Project-relative path of the file that produced the finding.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }
}
