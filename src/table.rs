//! Raw tabular data and the CSV loading boundary.
//!
//! A [`Table`] is the untyped input to the preprocessing pipeline: a fixed
//! header plus rows of [`Value`] cells. Column interpretation (numeric vs.
//! categorical) happens at extraction time, driven by the declared column
//! lists, not inferred from the data.

use crate::error::TransformError;
use crate::frame::{CategoryFrame, NumericFrame};
use csv::ReaderBuilder;
use ndarray::Array2;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A numeric value (integers are carried as `f64`).
    Number(f64),
    /// A categorical label.
    Text(String),
    /// A missing value (empty CSV field).
    Missing,
}

impl Value {
    /// Whether this cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Render a numeric cell as a category label, keeping integral values free
/// of a trailing fraction.
fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

/// An in-memory table: a fixed header and rows of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from a header and rows. Every row must have one cell
    /// per header column.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, TransformError> {
        let n_cols = columns.len();
        for row in &rows {
            if row.len() != n_cols {
                return Err(TransformError::ColumnMismatch {
                    expected: n_cols,
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Read a table from CSV. The first record is the header. Empty fields
    /// become [`Value::Missing`], fields that parse as numbers become
    /// [`Value::Number`], everything else becomes [`Value::Text`].
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TransformError> {
        let mut rdr = ReaderBuilder::new().from_reader(reader);

        let columns: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let row: Vec<Value> = record
                .iter()
                .map(|field| {
                    let field = field.trim();
                    if field.is_empty() {
                        Value::Missing
                    } else if let Ok(v) = field.parse::<f64>() {
                        Value::Number(v)
                    } else {
                        Value::Text(field.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Read a table from a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, TransformError> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Get the number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Get the header.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Find the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Extract one column as numeric values. Missing cells become NaN; text
    /// cells must parse as numbers.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, TransformError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))?;

        self.rows
            .iter()
            .map(|row| match &row[idx] {
                Value::Number(v) => Ok(*v),
                Value::Missing => Ok(f64::NAN),
                Value::Text(s) => s.parse::<f64>().map_err(|_| TransformError::InvalidValue {
                    column: name.to_string(),
                    value: s.clone(),
                }),
            })
            .collect()
    }

    /// Extract one column as category labels. Missing cells become `None`;
    /// numeric cells render through an integer-preserving format.
    pub fn category_column(&self, name: &str) -> Result<Vec<Option<String>>, TransformError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))?;

        Ok(self
            .rows
            .iter()
            .map(|row| match &row[idx] {
                Value::Text(s) => Some(s.clone()),
                Value::Number(v) => Some(format_number(*v)),
                Value::Missing => None,
            })
            .collect())
    }

    /// Extract the named columns as a numeric frame, in the given order.
    pub fn numeric_frame(&self, columns: &[String]) -> Result<NumericFrame, TransformError> {
        let mut column_data = Vec::with_capacity(columns.len());
        for name in columns {
            column_data.push(self.numeric_column(name)?);
        }

        let n_rows = self.n_rows();
        let mut flat = Vec::with_capacity(n_rows * columns.len());
        for row in 0..n_rows {
            for col in &column_data {
                flat.push(col[row]);
            }
        }
        let data = Array2::from_shape_vec((n_rows, columns.len()), flat).map_err(|e| {
            TransformError::InvalidShape {
                expected: format!("({}, {})", n_rows, columns.len()),
                got: e.to_string(),
            }
        })?;
        NumericFrame::new(columns.to_vec(), data)
    }

    /// Extract the named columns as a category frame, in the given order.
    pub fn category_frame(&self, columns: &[String]) -> Result<CategoryFrame, TransformError> {
        let mut column_data = Vec::with_capacity(columns.len());
        for name in columns {
            column_data.push(self.category_column(name)?);
        }

        let n_rows = self.n_rows();
        let rows: Vec<Vec<Option<String>>> = (0..n_rows)
            .map(|row| column_data.iter().map(|col| col[row].clone()).collect())
            .collect();
        CategoryFrame::new(columns.to_vec(), rows)
    }
}

/// Read a table from a CSV file. The loader boundary used by the
/// transformation stage.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table, TransformError> {
    Table::from_csv_path(path)
}
