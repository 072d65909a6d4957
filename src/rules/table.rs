//! Declarative text rules and the generic evaluator that runs them.
//!
//! A rule is data: a [`Check`] made of regular-expression patterns plus the
//! severity and wording of the finding it produces. Each category module keeps
//! its own ordered table and compiles it once on first use.

use regex::Regex;

use crate::models::{Category, Finding, ScanTarget, Severity};

/// Placeholder replaced with the match count in [`Check::Exceeds`] messages.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Condition a rule tests against the raw file text.
///
/// Patterns match anywhere in the file, comments and string literals included.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Fires when the pattern matches.
    Present(&'static str),
    /// Fires when `trigger` matches and none of `unless` do.
    Missing {
        trigger: &'static str,
        unless: &'static [&'static str],
    },
    /// Fires when the pattern matches more than `limit` times.
    Exceeds { pattern: &'static str, limit: usize },
}

/// One entry of a category's rule table.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub id: &'static str,
    pub check: Check,
    pub severity: Severity,
    pub message: &'static str,
    pub suggestion: &'static str,
}

enum Matcher {
    Present(Regex),
    Missing { trigger: Regex, unless: Vec<Regex> },
    Exceeds { pattern: Regex, limit: usize },
}

struct CompiledRule {
    rule: &'static TextRule,
    matcher: Matcher,
}

/// A category's rules with their patterns compiled.
pub struct RuleTable {
    category: Category,
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    /// Compile a static rule table.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern is not a valid regular expression. Every
    /// table is covered by a test that compiles it.
    pub fn compile(category: Category, rules: &'static [TextRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledRule {
                rule,
                matcher: compile_check(rule),
            })
            .collect();
        Self { category, rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against one file, in table order.
    pub fn evaluate(&self, target: &ScanTarget) -> Vec<Finding> {
        let text = target.content.as_str();
        let mut findings = Vec::new();

        for compiled in &self.rules {
            let rule = compiled.rule;
            let message = match &compiled.matcher {
                Matcher::Present(pattern) => pattern.is_match(text).then(|| rule.message.to_string()),
                Matcher::Missing { trigger, unless } => (trigger.is_match(text)
                    && !unless.iter().any(|re| re.is_match(text)))
                .then(|| rule.message.to_string()),
                Matcher::Exceeds { pattern, limit } => {
                    let count = pattern.find_iter(text).count();
                    (count > *limit)
                        .then(|| rule.message.replace(COUNT_PLACEHOLDER, &count.to_string()))
                }
            };

            if let Some(message) = message {
                findings.push(Finding::new(
                    target.path.clone(),
                    self.category,
                    rule.severity,
                    message,
                    rule.suggestion,
                ));
            }
        }

        findings
    }
}

fn compile_check(rule: &TextRule) -> Matcher {
    let compile = |pattern: &str| {
        Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid pattern in rule '{}': {e}", rule.id))
    };
    match rule.check {
        Check::Present(pattern) => Matcher::Present(compile(pattern)),
        Check::Missing { trigger, unless } => Matcher::Missing {
            trigger: compile(trigger),
            unless: unless.iter().map(|p| compile(p)).collect(),
        },
        Check::Exceeds { pattern, limit } => Matcher::Exceeds {
            pattern: compile(pattern),
            limit,
        },
    }
}
