//! Column schema and typed column data

/// Column layout of a table
#[derive(Debug, Clone, Default)]
pub struct DataSchema {
    /// Columns in file order
    pub columns: Vec<ColumnDescriptor>,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// Name and inferred type of a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Inferred column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every present cell is an integer and no cell is missing
    Int64,
    /// Every present cell is a number; missing cells become NaN
    Float64,
    /// Anything else
    Text,
}

impl ColumnType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int64 | ColumnType::Float64)
    }
}

/// A column of parsed values
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Text(Vec<String>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Text(_) => ColumnType::Text,
        }
    }

    /// Convert to f64 (for numeric types)
    ///
    /// Missing cells of a float column come back as NaN.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            DataColumn::Float64(v) => Some(v.clone()),
            DataColumn::Text(_) => None,
        }
    }
}
