//! Monthly metrics table.
//!
//! Rows are observations keyed by `month`; every other numeric column is
//! kept by name. Missing cells are carried as NaN.

use std::collections::{BTreeSet, HashMap};

use react_io::{open_file, DataReader, IoError};

use crate::error::{ExtractError, ExtractResult};
use crate::features::{is_tracked, MONTH_COLUMN};

/// In-memory metrics table loaded from a CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTable {
    months: Vec<f64>,
    columns: HashMap<String, Vec<f64>>,
}

impl MetricsTable {
    /// Create a table from its month column.
    pub fn new(months: Vec<f64>) -> Self {
        Self {
            months,
            columns: HashMap::new(),
        }
    }

    /// Add a feature column. Its length must match the month column.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> ExtractResult<Self> {
        let name = name.into();
        if values.len() != self.months.len() {
            return Err(ExtractError::RowCountMismatch {
                column: name,
                expected: self.months.len(),
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(self)
    }

    /// Load a metrics table from a file, picking the reader by extension.
    pub fn load(path: &str) -> ExtractResult<Self> {
        let reader = open_file(path)?;
        let table = Self::from_reader(&*reader)?;
        tracing::info!(
            "Loaded metrics table from {} ({} rows, {} columns)",
            path,
            table.num_rows(),
            table.columns.len() + 1
        );
        Ok(table)
    }

    /// Build a table from any data reader.
    ///
    /// Non-numeric columns are skipped unless they are tracked features,
    /// in which case the load fails.
    pub fn from_reader(reader: &dyn DataReader) -> ExtractResult<Self> {
        let schema = reader.read_schema()?;
        if schema.column(MONTH_COLUMN).is_none() {
            return Err(ExtractError::MissingColumn {
                column: MONTH_COLUMN.to_string(),
            });
        }

        let months = read_numeric(reader, MONTH_COLUMN)?;
        let mut table = Self::new(months);

        for descriptor in schema.columns.iter().filter(|c| c.name != MONTH_COLUMN) {
            if descriptor.dtype.is_numeric() {
                let values = read_numeric(reader, &descriptor.name)?;
                table = table.with_column(descriptor.name.clone(), values)?;
            } else if is_tracked(&descriptor.name) {
                return Err(ExtractError::NonNumericColumn {
                    column: descriptor.name.clone(),
                });
            } else {
                tracing::debug!("Skipping non-numeric column '{}'", descriptor.name);
            }
        }

        Ok(table)
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.months.len()
    }

    /// The month column.
    pub fn months(&self) -> &[f64] {
        &self.months
    }

    /// Look up a feature column by name.
    pub fn column(&self, name: &str) -> ExtractResult<&[f64]> {
        if name == MONTH_COLUMN {
            return Ok(&self.months);
        }
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ExtractError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Distinct month values in ascending order, truncated to integers.
    pub fn distinct_months(&self) -> Vec<i64> {
        self.months
            .iter()
            .filter(|m| m.is_finite())
            .map(|&m| m as i64)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn read_numeric(reader: &dyn DataReader, name: &str) -> ExtractResult<Vec<f64>> {
    reader.read_numeric_column(name).map_err(|e| match e {
        IoError::TypeMismatch { column, .. } => ExtractError::NonNumericColumn { column },
        IoError::ColumnNotFound(column) => ExtractError::MissingColumn { column },
        other => ExtractError::Input(other),
    })
}
