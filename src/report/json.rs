use serde_json::{json, Value};

use crate::models::AnalysisReport;

/// Render a report as JSON, with derived totals alongside the findings.
pub fn to_json(report: &AnalysisReport) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(report)?;
    let counts: serde_json::Map<String, Value> = report
        .counts_by_severity()
        .into_iter()
        .map(|(severity, count)| (severity.to_string(), json!(count)))
        .collect();

    if let Value::Object(map) = &mut value {
        map.insert("total_findings".into(), json!(report.total_findings()));
        map.insert("counts_by_severity".into(), Value::Object(counts));
    }
    Ok(value)
}
