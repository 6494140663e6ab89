//! Extraction pipeline
//!
//! Evaluates feature trends for a month, selects the ReACTs tagged with a
//! triggered feature and writes the ranked result. In all-months mode the
//! pipeline runs once per distinct month and the combined result is
//! written once at the end.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use react_io::{load_json_array, write_json_pretty};
use serde::Serialize;

use crate::config::ExtractorConfig;
use crate::entry::ReactEntry;
use crate::error::{ExtractError, ExtractResult};
use crate::features::TRACKED_FEATURES;
use crate::select::select;
use crate::table::MetricsTable;
use crate::trend::evaluate;

/// Extraction result per month, keyed by month number.
pub type MonthlyReacts = BTreeMap<i64, Vec<ReactEntry>>;

/// Run the pipeline for one month: evaluate, then select.
pub fn extract(
    entries: &[ReactEntry],
    table: &MetricsTable,
    month: i64,
) -> ExtractResult<Vec<ReactEntry>> {
    let triggered = evaluate(table, month, &TRACKED_FEATURES)?;
    let selected = select(entries, &triggered);
    tracing::debug!(
        "Month {}: {} triggered features, {} of {} ReACTs selected",
        month,
        triggered.len(),
        selected.len(),
        entries.len()
    );
    Ok(selected)
}

/// Run the pipeline for every distinct month in the table.
pub fn extract_all_months(entries: &[ReactEntry], table: &MetricsTable) -> ExtractResult<MonthlyReacts> {
    table
        .distinct_months()
        .into_iter()
        .map(|month| Ok((month, extract(entries, table, month)?)))
        .collect()
}

/// Extractor bound to a reference ReACT set and an output location.
#[derive(Debug, Clone)]
pub struct ReactExtractor {
    entries: Vec<ReactEntry>,
    output_path: PathBuf,
}

impl ReactExtractor {
    /// Create an extractor from already-loaded entries.
    pub fn new(entries: Vec<ReactEntry>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            entries,
            output_path: output_path.into(),
        }
    }

    /// Load the reference set named by `config`.
    pub fn load(config: &ExtractorConfig) -> ExtractResult<Self> {
        let entries: Vec<ReactEntry> = load_json_array(&config.reference_path)?;
        tracing::info!(
            "Loaded {} ReACTs from {}",
            entries.len(),
            config.reference_path.display()
        );
        Ok(Self::new(entries, config.output_path.clone()))
    }

    /// Reference entries, in file order.
    pub fn entries(&self) -> &[ReactEntry] {
        &self.entries
    }

    /// Where results are written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Extract for one month, optionally writing the result.
    pub fn run_month(
        &self,
        table: &MetricsTable,
        month: i64,
        write_output: bool,
    ) -> ExtractResult<Vec<ReactEntry>> {
        let selected = extract(&self.entries, table, month)?;
        if write_output {
            self.write(&selected)?;
            tracing::info!("ReACTs saved in {}", self.output_path.display());
        }
        Ok(selected)
    }

    /// Extract for every month in the table, optionally writing the
    /// combined result once all months are done.
    pub fn run_all_months(
        &self,
        table: &MetricsTable,
        write_output: bool,
    ) -> ExtractResult<MonthlyReacts> {
        let results = extract_all_months(&self.entries, table)?;
        if write_output {
            self.write(&results)?;
            tracing::info!(
                "ReACTs for all {} months saved in {}",
                results.len(),
                self.output_path.display()
            );
        }
        Ok(results)
    }

    fn write<T: Serialize + ?Sized>(&self, value: &T) -> ExtractResult<()> {
        write_json_pretty(&self.output_path, value).map_err(|source| ExtractError::WriteFailed {
            path: self.output_path.display().to_string(),
            source,
        })
    }
}
