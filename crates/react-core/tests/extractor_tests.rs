//! End-to-end extraction tests against the fixture metrics and ReACT set

mod common;

use std::collections::BTreeSet;

use common::fixtures::{fixture_path, load_metrics, load_reacts, metrics_csv, titles};
use react_core::{
    evaluate, extract, ExtractError, ExtractorConfig, MetricsTable, ReactExtractor,
    TRACKED_FEATURES,
};
use rstest::rstest;
use serde_json::Value;
use tempfile::TempDir;

const ENCOURAGE: &str = "Encourage pairing across modules";
const ROTATE: &str = "Rotate reviewers between subsystems";
const ONBOARD: &str = "Onboard new contributors with mentors";
const DOCUMENT: &str = "Document ownership of files";

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// === Feature trends ===

#[rstest]
#[case(1, &["t_num_dev_nodes", "st_num_dev"])]
#[case(4, &[])]
#[case(6, &["t_net_overlap"])]
#[case(9, &["t_graph_density", "t_net_overlap"])]
fn test_triggered_features(#[case] month: i64, #[case] expected: &[&str]) {
    let triggered = evaluate(&load_metrics(), month, &TRACKED_FEATURES).unwrap();
    assert_eq!(triggered, names(expected));
}

#[test]
fn test_empty_window_triggers_every_feature() {
    let triggered = evaluate(&load_metrics(), 20, &TRACKED_FEATURES).unwrap();
    assert_eq!(triggered, names(&TRACKED_FEATURES));
}

// === Selection ===

#[rstest]
#[case(1, &[ONBOARD])]
#[case(3, &[])]
#[case(9, &[ENCOURAGE])]
#[case(20, &[ROTATE, ONBOARD, ENCOURAGE, DOCUMENT])]
fn test_extract_month(#[case] month: i64, #[case] expected: &[&str]) {
    let selected = extract(&load_reacts(), &load_metrics(), month).unwrap();
    assert_eq!(titles(&selected), expected);
}

#[test]
fn test_substring_tags_are_not_matched() {
    let selected = extract(&load_reacts(), &load_metrics(), 9).unwrap();
    assert!(!titles(&selected).contains(&"Hold regular design syncs"));
}

// === Orchestration ===

#[test]
fn test_all_months_cover_distinct_months() {
    let extractor = ReactExtractor::new(load_reacts(), "unused.json");
    let results = extractor.run_all_months(&load_metrics(), false).unwrap();

    assert_eq!(
        results.keys().copied().collect::<Vec<_>>(),
        (1..=9).collect::<Vec<i64>>()
    );
    assert!((2..=5).all(|m| results[&m].is_empty()));
    assert_eq!(titles(&results[&9]), vec![ENCOURAGE]);
}

#[test]
fn test_single_month_output_file() {
    let dir = TempDir::new().unwrap();
    let config = ExtractorConfig::default()
        .with_reference_path(fixture_path("react_set.json"))
        .with_output_path(dir.path().join("output").join("extracted_react.json"));

    let extractor = ReactExtractor::load(&config).unwrap();
    extractor.run_month(&load_metrics(), 9, true).unwrap();

    let written = std::fs::read_to_string(&config.output_path).unwrap();
    let expected = r#"[
    {
        "ReACT": "Encourage pairing across modules",
        "Category": "Communication",
        "Features": "t_graph_density, t_net_overlap",
        "Importance": 3
    }
]"#;
    assert_eq!(written, expected);
}

#[test]
fn test_all_months_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extracted_react.json");
    let extractor = ReactExtractor::new(load_reacts(), &path);

    extractor.run_all_months(&load_metrics(), true).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let object = written.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(object["1"][0]["ReACT"], ONBOARD);
    assert_eq!(object["3"], Value::Array(Vec::new()));
}

// === Failures ===

#[test]
fn test_missing_csv_fails() {
    let err = MetricsTable::load("/nonexistent/metrics.csv").unwrap_err();
    assert!(matches!(err, ExtractError::Input(_)));
}

#[test]
fn test_missing_feature_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(&path, "month,t_graph_density\n9,5\n").unwrap();

    let table = MetricsTable::load(path.to_str().unwrap()).unwrap();
    let err = extract(&load_reacts(), &table, 9).unwrap_err();
    assert!(matches!(err, ExtractError::MissingColumn { .. }));
}

#[test]
fn test_fixture_loads() {
    let table = MetricsTable::load(&metrics_csv()).unwrap();
    assert_eq!(table.num_rows(), 9);
    // Blank cell in the last row is carried as missing
    assert!(table.column("t_net_overlap").unwrap()[8].is_nan());
}
