//! The tool surface driven end to end, with the update check kept offline.

use chrono::{DateTime, TimeZone, Utc};
use rn_advisor::tools::{ToolRegistry, ToolResult};
use rn_advisor::update_check::{Clock, MemoryTimestampStore, ReleaseSource, UpdateChecker};
use serde_json::json;

use super::helpers::mixed_project;

struct Pinned;

impl ReleaseSource for Pinned {
    fn latest_version(&self) -> anyhow::Result<String> {
        Ok("v0.1.0".to_string())
    }
}

struct Fixed;

impl Clock for Fixed {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }
}

fn registry() -> ToolRegistry {
    ToolRegistry::with_update_checker(
        UpdateChecker::new(Pinned, MemoryTimestampStore::new(), Fixed)
            .with_current_version("0.1.0"),
    )
}

fn body(result: &ToolResult) -> String {
    result.joined_text()
}

#[test]
fn test_comprehensive_tool_on_mixed_project() {
    let temp = mixed_project().unwrap();
    let result = registry().call(
        "analyze_codebase_comprehensive",
        &json!({ "codebase_path": temp.path().to_str().unwrap() }),
    );

    assert!(!result.is_error);
    let text = body(&result);
    assert!(text.contains("## Critical & High Priority"));
    assert!(text.contains("`src/Config.ts`"));
    assert!(text.contains("FlatList without keyExtractor"));
    assert!(!text.contains("Foo.test"));
}

#[test]
fn test_result_serializes_to_tool_shape() {
    let result = registry().call("check_for_updates", &json!({ "force": true }));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["isError"], false);
    assert_eq!(value["content"][0]["type"], "text");
    assert_eq!(
        value["content"][0]["text"],
        "You're running the latest version (0.1.0)."
    );
}

#[test]
fn test_argument_type_error_is_text() {
    let result = registry().call("analyze_codebase_performance", &json!({ "codebase_path": 42 }));
    assert!(result.is_error);
    assert_eq!(
        body(&result),
        "Error occurred: Argument 'codebase_path' must be a string"
    );
}

#[test]
fn test_schema_listing_serializes() {
    let registry = registry();
    let value = serde_json::to_value(registry.list()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 6);
    assert_eq!(value[0]["name"], "analyze_codebase_comprehensive");
    assert!(value[0]["inputSchema"]["properties"]["codebase_path"].is_object());
}
