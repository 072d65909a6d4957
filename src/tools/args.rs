//! Typed access to a tool call's JSON arguments.

use serde_json::Value;
use std::path::PathBuf;

use super::ToolError;
use crate::models::{Category, Severity};

pub const DEFAULT_CODEBASE_PATH: &str = ".";

/// Optional string argument. `null` counts as absent.
pub fn opt_str<'a>(args: &'a Value, name: &'static str) -> Result<Option<&'a str>, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(ToolError::InvalidArgument {
            name,
            expected: "a string",
        }),
    }
}

pub fn required_str<'a>(args: &'a Value, name: &'static str) -> Result<&'a str, ToolError> {
    opt_str(args, name)?.ok_or(ToolError::MissingArgument(name))
}

pub fn opt_bool(args: &Value, name: &'static str) -> Result<Option<bool>, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ToolError::InvalidArgument {
            name,
            expected: "a boolean",
        }),
    }
}

/// `codebase_path`, defaulting to the working directory.
pub fn codebase_path(args: &Value) -> Result<PathBuf, ToolError> {
    Ok(PathBuf::from(
        opt_str(args, "codebase_path")?.unwrap_or(DEFAULT_CODEBASE_PATH),
    ))
}

/// `analysis_types`: an array of category names. Absent or empty selects all.
pub fn categories(args: &Value) -> Result<Option<Vec<Category>>, ToolError> {
    let items = match args.get("analysis_types") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ToolError::InvalidArgument {
                name: "analysis_types",
                expected: "an array of strings",
            })
        }
    };
    if items.is_empty() {
        return Ok(None);
    }

    let mut categories = Vec::with_capacity(items.len());
    for item in items {
        let name = item.as_str().ok_or(ToolError::InvalidArgument {
            name: "analysis_types",
            expected: "an array of strings",
        })?;
        let category = name.parse::<Category>().map_err(ToolError::InvalidValue)?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(Some(categories))
}

pub fn min_severity(args: &Value) -> Result<Option<Severity>, ToolError> {
    opt_str(args, "min_severity")?
        .map(|raw| raw.parse::<Severity>().map_err(ToolError::InvalidValue))
        .transpose()
}
