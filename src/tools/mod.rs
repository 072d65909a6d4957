//! Tool surface: the named operations an assistant client can invoke.
//!
//! Every tool takes a JSON object of named arguments and answers with text.
//! Failures never escape [`ToolRegistry::call`]: handler errors and panics are
//! turned into a single error-flagged `Error occurred: ...` result.

pub mod args;
pub mod result;

use serde::Serialize;
use serde_json::{json, Value};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

use crate::analyzer::{self, AnalysisOptions};
use crate::config::Settings;
use crate::models::Category;
use crate::report::{self, COMPONENT_TITLE, COMPREHENSIVE_TITLE, PERFORMANCE_TITLE, UPGRADES_TITLE};
use crate::testgen;
use crate::update_check::{self, FileTimestampStore, GitHubReleases, SystemClock, UpdateChecker};
use crate::upgrades;
use crate::utils::truncate;

pub use result::{ToolContent, ToolResult};

pub const ERROR_PREFIX: &str = "Error occurred: ";
pub const DEFAULT_COMPONENT_FILE: &str = "Component.tsx";
const MAX_PANIC_MESSAGE_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("Argument '{name}' must be {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },

    #[error("{0}")]
    InvalidValue(String),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Name, description and JSON input schema of one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    update_checker: UpdateChecker,
}

impl ToolRegistry {
    /// Registry whose update check talks to GitHub and persists its
    /// timestamp under the configured state directory.
    pub fn new(settings: &Settings) -> Self {
        let checker = UpdateChecker::new(
            GitHubReleases::new(&settings.update_repo),
            FileTimestampStore::in_state_dir(&settings.state_dir),
            SystemClock,
        )
        .with_interval(settings.check_interval());
        Self::with_update_checker(checker)
    }

    pub fn with_update_checker(update_checker: UpdateChecker) -> Self {
        Self {
            specs: tool_specs(),
            update_checker,
        }
    }

    pub fn list(&self) -> &[ToolSpec] {
        &self.specs
    }

    pub fn spec(&self, name: &str) -> Option<&ToolSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Invoke a tool by name.
    pub fn call(&self, name: &str, args: &Value) -> ToolResult {
        tracing::debug!(tool = name, "tool call");
        match panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(name, args))) {
            Ok(Ok(text)) => ToolResult::text(text),
            Ok(Err(err)) => {
                tracing::warn!(tool = name, error = %err, "tool call failed");
                ToolResult::error(format!("{ERROR_PREFIX}{err}"))
            }
            Err(payload) => {
                let message = truncate(&panic_message(payload.as_ref()), MAX_PANIC_MESSAGE_CHARS);
                tracing::error!(tool = name, %message, "tool call panicked");
                ToolResult::error(format!("{ERROR_PREFIX}{message}"))
            }
        }
    }

    fn dispatch(&self, name: &str, args: &Value) -> Result<String, ToolError> {
        match name {
            "analyze_codebase_comprehensive" => {
                let root = args::codebase_path(args)?;
                let options = AnalysisOptions {
                    categories: args::categories(args)?,
                    min_severity: args::min_severity(args)?,
                };
                let report = analyzer::analyze_codebase(&root, &options);
                Ok(report::format_report(&report, COMPREHENSIVE_TITLE))
            }
            "analyze_codebase_performance" => {
                let root = args::codebase_path(args)?;
                let options = AnalysisOptions::only([Category::Performance]);
                let report = analyzer::analyze_codebase(&root, &options);
                Ok(report::format_report(&report, PERFORMANCE_TITLE))
            }
            "analyze_component" => {
                let code = args::required_str(args, "code")?;
                let file_name = args::opt_str(args, "file_name")?.unwrap_or(DEFAULT_COMPONENT_FILE);
                let options = AnalysisOptions {
                    categories: args::categories(args)?,
                    min_severity: args::min_severity(args)?,
                };
                let report = analyzer::analyze_source(file_name, code, &options);
                Ok(report::format_report(&report, COMPONENT_TITLE))
            }
            "check_upgrades" => {
                let root = args::codebase_path(args)?;
                let report = upgrades::project_report(&root);
                Ok(report::format_report(&report, UPGRADES_TITLE))
            }
            "generate_component_test" => {
                let code = args::required_str(args, "code")?;
                let name = args::opt_str(args, "component_name")?;
                Ok(testgen::generate_component_test(code, name))
            }
            "check_for_updates" => {
                let force = args::opt_bool(args, "force")?.unwrap_or(false);
                let status = self.update_checker.check(force)?;
                Ok(update_check::format_status(&status))
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tool handler panicked".to_string()
    }
}

fn codebase_path_schema() -> Value {
    json!({
        "type": "string",
        "description": "Path to the React Native project root (defaults to the working directory)"
    })
}

fn tool_specs() -> Vec<ToolSpec> {
    let category_names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();

    vec![
        ToolSpec {
            name: "analyze_codebase_comprehensive",
            description: "Scan a React Native codebase for security, performance, code quality, \
                          refactoring, deprecated API, accessibility, testing and upgrade issues",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "codebase_path": codebase_path_schema(),
                    "analysis_types": {
                        "type": "array",
                        "items": { "type": "string", "enum": category_names },
                        "description": "Categories to run (all when omitted)"
                    },
                    "min_severity": {
                        "type": "string",
                        "enum": ["low", "medium", "high", "critical"],
                        "description": "Hide findings below this severity"
                    }
                }
            }),
        },
        ToolSpec {
            name: "analyze_codebase_performance",
            description: "Scan a React Native codebase for performance issues only",
            input_schema: json!({
                "type": "object",
                "properties": { "codebase_path": codebase_path_schema() }
            }),
        },
        ToolSpec {
            name: "analyze_component",
            description: "Run the per-file checks over a single component's source code",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Component source code" },
                    "file_name": {
                        "type": "string",
                        "description": "File name used in findings (defaults to Component.tsx)"
                    },
                    "analysis_types": {
                        "type": "array",
                        "items": { "type": "string", "enum": category_names }
                    },
                    "min_severity": {
                        "type": "string",
                        "enum": ["low", "medium", "high", "critical"]
                    }
                },
                "required": ["code"]
            }),
        },
        ToolSpec {
            name: "check_upgrades",
            description: "Check package.json for an outdated React Native version, \
                          deprecated packages and missing lint tooling",
            input_schema: json!({
                "type": "object",
                "properties": { "codebase_path": codebase_path_schema() }
            }),
        },
        ToolSpec {
            name: "generate_component_test",
            description: "Generate a Jest + React Native Testing Library test file for a component",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Component source code" },
                    "component_name": {
                        "type": "string",
                        "description": "Component name (inferred from the code when omitted)"
                    }
                },
                "required": ["code"]
            }),
        },
        ToolSpec {
            name: "check_for_updates",
            description: "Check whether a newer release of this server is available \
                          (at most once per day unless forced)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "force": { "type": "boolean", "description": "Ignore the daily check limit" }
                }
            }),
        },
    ]
}
