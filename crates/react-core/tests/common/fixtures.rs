//! Test fixture loading utilities

use std::path::PathBuf;

use react_core::{MetricsTable, ReactEntry};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Path to the metrics CSV fixture as a string
pub fn metrics_csv() -> String {
    fixture_path("metrics.csv").to_string_lossy().into_owned()
}

/// Load the metrics table fixture
pub fn load_metrics() -> MetricsTable {
    MetricsTable::load(&metrics_csv())
        .unwrap_or_else(|e| panic!("Failed to load metrics fixture: {}", e))
}

/// Load the reference ReACT set fixture
pub fn load_reacts() -> Vec<ReactEntry> {
    react_io::load_json_array(fixture_path("react_set.json"))
        .unwrap_or_else(|e| panic!("Failed to load ReACT fixture: {}", e))
}

/// The `ReACT` text of each entry, in order
pub fn titles(entries: &[ReactEntry]) -> Vec<&str> {
    entries
        .iter()
        .map(|e| e.fields()["ReACT"].as_str().unwrap_or_default())
        .collect()
}
