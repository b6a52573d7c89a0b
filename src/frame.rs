//! Named column blocks exchanged between transformers.
//!
//! Transformers in this crate address columns by name, not position, so the
//! data they exchange carries its header along: [`NumericFrame`] pairs an
//! ordered list of column names with a dense `f64` matrix (missing values as
//! NaN), and [`CategoryFrame`] is the pre-encoding equivalent for string
//! categories (missing values as `None`).

use crate::error::TransformError;
use ndarray::{concatenate, Array2, ArrayView1, Axis};

/// A named block of numeric columns.
///
/// Rows are samples, columns are features. Column order is significant and
/// preserved by every transformer.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericFrame {
    columns: Vec<String>,
    data: Array2<f64>,
}

impl NumericFrame {
    /// Create a frame from column names and a matching matrix.
    pub fn new(columns: Vec<String>, data: Array2<f64>) -> Result<Self, TransformError> {
        if columns.len() != data.ncols() {
            return Err(TransformError::ColumnMismatch {
                expected: columns.len(),
                got: data.ncols(),
            });
        }
        Ok(Self { columns, data })
    }

    /// Create a frame from row-major sample data. Every row must have one
    /// value per column.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TransformError> {
        let n_cols = columns.len();
        let n_rows = rows.len();
        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(TransformError::ColumnMismatch {
                    expected: n_cols,
                    got: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        let data = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| TransformError::InvalidShape {
                expected: format!("({}, {})", n_rows, n_cols),
                got: e.to_string(),
            })?;
        Ok(Self { columns, data })
    }

    /// Get the (rows, columns) shape.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Get the number of rows (samples).
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Get the number of columns (features).
    pub fn n_columns(&self) -> usize {
        self.data.ncols()
    }

    /// Get the ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the underlying matrix.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the frame, keeping only the matrix.
    pub fn into_matrix(self) -> Array2<f64> {
        self.data
    }

    /// View a single column by index.
    pub fn column(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.data.column(idx)
    }

    /// Concatenate frames column-wise, in order. All frames must agree on the
    /// number of rows.
    pub fn hstack(frames: &[NumericFrame]) -> Result<NumericFrame, TransformError> {
        let first = frames.first().ok_or_else(|| {
            TransformError::EmptyData("cannot concatenate zero frames".to_string())
        })?;
        let n_rows = first.n_rows();
        for frame in frames {
            if frame.n_rows() != n_rows {
                return Err(TransformError::InvalidShape {
                    expected: format!("{} rows", n_rows),
                    got: format!("{} rows", frame.n_rows()),
                });
            }
        }

        let views: Vec<_> = frames.iter().map(|f| f.data.view()).collect();
        let data = concatenate(Axis(1), &views).map_err(|e| TransformError::InvalidShape {
            expected: "frames with equal row counts".to_string(),
            got: e.to_string(),
        })?;
        let columns = frames
            .iter()
            .flat_map(|f| f.columns.iter().cloned())
            .collect();
        Ok(NumericFrame { columns, data })
    }
}

/// A named block of categorical columns before encoding.
///
/// Cells are raw category labels; `None` marks a missing value.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryFrame {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl CategoryFrame {
    /// Create a frame from column names and row-major cells.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    ) -> Result<Self, TransformError> {
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

    /// Get the number of rows (samples).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Get the ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the raw rows.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Option<String>> + '_ {
        self.rows.iter().map(move |row| &row[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_numeric_frame_new() {
        let frame =
            NumericFrame::new(names(&["a", "b"]), array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(frame.shape(), (2, 2));
        assert_eq!(frame.columns(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_numeric_frame_new_width_mismatch() {
        let result = NumericFrame::new(names(&["a"]), array![[1.0, 2.0]]);
        assert!(matches!(
            result,
            Err(TransformError::ColumnMismatch {
                expected: 1,
                got: 2
            })
        ));
    }

    #[test]
    fn test_numeric_frame_from_rows() {
        let frame = NumericFrame::from_rows(
            names(&["a", "b"]),
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
        )
        .unwrap();
        assert_eq!(frame.shape(), (3, 2));
        assert_eq!(frame.column(1).to_vec(), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_numeric_frame_from_rows_ragged() {
        let result = NumericFrame::from_rows(names(&["a", "b"]), vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(TransformError::ColumnMismatch { .. })));
    }

    #[test]
    fn test_numeric_frame_hstack() {
        let left = NumericFrame::new(names(&["a"]), array![[1.0], [2.0]]).unwrap();
        let right = NumericFrame::new(names(&["b", "c"]), array![[3.0, 4.0], [5.0, 6.0]]).unwrap();

        let stacked = NumericFrame::hstack(&[left, right]).unwrap();
        assert_eq!(stacked.shape(), (2, 3));
        assert_eq!(
            stacked.columns(),
            &["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(*stacked.data(), array![[1.0, 3.0, 4.0], [2.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_numeric_frame_hstack_row_mismatch() {
        let left = NumericFrame::new(names(&["a"]), array![[1.0], [2.0]]).unwrap();
        let right = NumericFrame::new(names(&["b"]), array![[3.0]]).unwrap();

        let result = NumericFrame::hstack(&[left, right]);
        assert!(matches!(result, Err(TransformError::InvalidShape { .. })));
    }

    #[test]
    fn test_numeric_frame_hstack_empty() {
        let result = NumericFrame::hstack(&[]);
        assert!(matches!(result, Err(TransformError::EmptyData(_))));
    }

    #[test]
    fn test_numeric_frame_into_matrix() {
        let frame = NumericFrame::new(names(&["a"]), array![[1.0], [2.0]]).unwrap();
        let matrix = frame.into_matrix();
        assert_eq!(matrix, array![[1.0], [2.0]]);
    }

    #[test]
    fn test_category_frame_new() {
        let frame = CategoryFrame::new(
            names(&["color"]),
            vec![
                vec![Some("red".to_string())],
                vec![None],
                vec![Some("blue".to_string())],
            ],
        )
        .unwrap();
        assert_eq!(frame.n_rows(), 3);
        assert_eq!(frame.n_columns(), 1);

        let cells: Vec<_> = frame.column(0).cloned().collect();
        assert_eq!(
            cells,
            vec![Some("red".to_string()), None, Some("blue".to_string())]
        );
    }

    #[test]
    fn test_category_frame_ragged() {
        let result = CategoryFrame::new(
            names(&["a", "b"]),
            vec![vec![Some("x".to_string())]],
        );
        assert!(matches!(result, Err(TransformError::ColumnMismatch { .. })));
    }
}
