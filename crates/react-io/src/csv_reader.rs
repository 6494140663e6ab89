//! CSV file reader with type inference

use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, DataSchema};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell values treated as missing data
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Comma-separated file with a header row
///
/// The whole file is parsed on open; columns are typed from every row.
/// Header names are taken verbatim, cell values are trimmed.
pub struct CsvReader {
    schema: DataSchema,
    cells: Vec<Vec<String>>,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open(path: &str) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse CSV from any reader (used for in-memory data)
    pub fn from_reader<R: Read>(source: R) -> IoResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            for (column, value) in cells.iter_mut().zip(record.iter()) {
                column.push(value.trim().to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells.iter())
            .map(|(name, values)| ColumnDescriptor::new(name, infer_type(values)))
            .collect();

        Ok(Self {
            schema: DataSchema::new(columns),
            cells,
        })
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;

        let col_desc = &self.schema.columns[col_index];
        Ok(parse_column(&self.cells[col_index], col_desc.dtype))
    }
}

fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

/// Infer column type from its values
///
/// An integer column with missing cells is widened to float so the gaps
/// can be carried as NaN.
fn infer_type(values: &[String]) -> ColumnType {
    let present: Vec<&str> = values
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !is_missing(s))
        .collect();
    if present.is_empty() {
        return if values.is_empty() {
            ColumnType::Text
        } else {
            ColumnType::Float64
        };
    }

    if present.iter().all(|s| s.parse::<i64>().is_ok()) {
        return if present.len() < values.len() {
            ColumnType::Float64
        } else {
            ColumnType::Int64
        };
    }

    if present.iter().all(|s| s.parse::<f64>().is_ok()) {
        return ColumnType::Float64;
    }

    ColumnType::Text
}

/// Parse column values into a DataColumn
fn parse_column(values: &[String], dtype: ColumnType) -> DataColumn {
    match dtype {
        ColumnType::Int64 => {
            DataColumn::Int64(values.iter().map(|s| s.parse().unwrap_or(0)).collect())
        }
        ColumnType::Float64 => DataColumn::Float64(
            values
                .iter()
                .map(|s| {
                    if is_missing(s) {
                        f64::NAN
                    } else {
                        s.parse().unwrap_or(f64::NAN)
                    }
                })
                .collect(),
        ),
        ColumnType::Text => DataColumn::Text(values.to_vec()),
    }
}
