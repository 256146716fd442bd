//! Pins the JSON surface of the analysis report (the `--json` output and the
//! history file format): slot names, camelCase analyzer fields, and null for
//! absent slots.

use sensei::models::{CodeSummary, ComplexityReport, TopicList};
use sensei::AnalysisReport;
use serde_json::Value;

fn report_json(report: &AnalysisReport) -> Value {
    serde_json::to_value(report).unwrap()
}

#[test]
fn report_exposes_exactly_the_six_named_slots() {
    let report = AnalysisReport::new(1, 10, "gpt-5-mini".to_string());
    let json = report_json(&report);
    let object = json.as_object().unwrap();

    for slot in [
        "summary",
        "explanation",
        "complexity",
        "alternatives",
        "practice_problems",
        "topics",
    ] {
        assert!(object.contains_key(slot), "missing slot key {}", slot);
    }
}

#[test]
fn absent_slots_serialize_as_null() {
    let report = AnalysisReport::new(1, 10, "gpt-5-mini".to_string());
    let json = report_json(&report);

    assert!(json["summary"].is_null());
    assert!(json["alternatives"].is_null());
}

#[test]
fn populated_slots_serialize_their_full_shape() {
    let mut report = AnalysisReport::new(2, 30, "gpt-5-mini".to_string());
    report.summary = Some(CodeSummary {
        summary: "Swaps two variables.".to_string(),
    });
    report.complexity = Some(ComplexityReport {
        time_complexity: "O(1)".to_string(),
        space_complexity: "O(1)".to_string(),
        justification: "Fixed number of operations.".to_string(),
    });
    report.topics = Some(TopicList {
        topics: vec!["Variables".to_string()],
    });

    let json = report_json(&report);

    assert_eq!(json["summary"]["summary"], "Swaps two variables.");
    assert_eq!(json["complexity"]["timeComplexity"], "O(1)");
    assert_eq!(json["complexity"]["spaceComplexity"], "O(1)");
    assert_eq!(json["topics"]["topics"][0], "Variables");
}

#[test]
fn report_carries_snippet_and_model_metadata() {
    let report = AnalysisReport::new(12, 340, "claude-sonnet-4".to_string()).with_duration(900);
    let json = report_json(&report);

    assert_eq!(json["snippet_lines"], 12);
    assert_eq!(json["snippet_bytes"], 340);
    assert_eq!(json["model_used"], "claude-sonnet-4");
    assert_eq!(json["analysis_duration_ms"], 900);
}

#[test]
fn failure_diagnostics_are_part_of_the_schema() {
    let mut report = AnalysisReport::new(1, 10, "gpt-5-mini".to_string());
    report.record_failure(
        sensei::AnalysisKind::Complexity,
        "Request failed: connection refused".to_string(),
    );

    let json = report_json(&report);

    assert_eq!(json["failures"][0]["kind"], "Complexity");
    assert!(json["failures"][0]["reason"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}
