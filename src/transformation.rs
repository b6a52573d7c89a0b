//! The data transformation stage.
//!
//! Orchestrates the full preprocessing pass: split the label off the train
//! and test tables, fit the column preprocessor on the train features,
//! transform both tables, append the raw label as the last matrix column,
//! and persist the fitted preprocessor for inference-time reuse.

use crate::error::TransformError;
use crate::frame::NumericFrame;
use crate::preprocessing::{
    ColumnPreprocessor, FittedColumnPreprocessor, FittedTransformer, Transformer,
};
use crate::schema;
use crate::table::{read_table, Table};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Configuration for the transformation stage.
#[derive(Clone, Debug)]
pub struct TransformationConfig {
    /// Where the fitted preprocessor artifact is written.
    pub artifact_path: PathBuf,
}

impl Default for TransformationConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("artifacts").join("preprocessor.bin"),
        }
    }
}

/// The result of a transformation run.
pub struct TransformedData {
    /// Transformed train matrix, label in the last column.
    pub train: Array2<f64>,
    /// Transformed test matrix, label in the last column.
    pub test: Array2<f64>,
    /// The fitted preprocessor, also persisted at `artifact_path`.
    pub preprocessor: FittedColumnPreprocessor,
    /// Where the fitted preprocessor was written.
    pub artifact_path: PathBuf,
}

/// The transformation stage entry point.
pub struct DataTransformation {
    config: TransformationConfig,
    preprocessor: ColumnPreprocessor,
}

impl Default for DataTransformation {
    fn default() -> Self {
        Self::new()
    }
}

impl DataTransformation {
    /// Create a stage with the default configuration and the fixed
    /// student-performance schema.
    pub fn new() -> Self {
        Self {
            config: TransformationConfig::default(),
            preprocessor: ColumnPreprocessor::new(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: TransformationConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the preprocessor (e.g., for custom column lists).
    pub fn with_preprocessor(mut self, preprocessor: ColumnPreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Fit on the train table, transform both tables, append the label column
    /// and persist the fitted preprocessor.
    ///
    /// The label passes through untouched: the last column of each returned
    /// matrix holds the original label values.
    ///
    /// # Errors
    /// Fails if the label or a declared feature column is absent from either
    /// table, if a numeric column has no observed values, or if the artifact
    /// cannot be written. Failures leave no partially-fitted state behind.
    pub fn run(
        &self,
        train: &Table,
        test: &Table,
        label: &str,
    ) -> Result<TransformedData, TransformError> {
        let train_label = train.numeric_column(label)?;
        let test_label = test.numeric_column(label)?;

        let fitted = self.preprocessor.fit(train)?;
        let train_features = fitted.transform(train)?;
        let test_features = fitted.transform(test)?;

        let train_matrix = append_label(train_features, label, train_label)?;
        let test_matrix = append_label(test_features, label, test_label)?;

        if let Some(parent) = self.config.artifact_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        fitted.save_to_file(&self.config.artifact_path)?;

        Ok(TransformedData {
            train: train_matrix,
            test: test_matrix,
            preprocessor: fitted,
            artifact_path: self.config.artifact_path.clone(),
        })
    }

    /// Read the train and test tables from CSV files, then run with the
    /// dataset's label column.
    pub fn run_from_paths<P: AsRef<Path>>(
        &self,
        train_path: P,
        test_path: P,
    ) -> Result<TransformedData, TransformError> {
        let train = read_table(train_path)?;
        let test = read_table(test_path)?;
        self.run(&train, &test, schema::LABEL_COLUMN)
    }
}

/// Append the raw label values as the last matrix column.
fn append_label(
    features: NumericFrame,
    label: &str,
    values: Vec<f64>,
) -> Result<Array2<f64>, TransformError> {
    let n_rows = values.len();
    let label_column = Array2::from_shape_vec((n_rows, 1), values).map_err(|e| {
        TransformError::InvalidShape {
            expected: format!("({}, 1)", n_rows),
            got: e.to_string(),
        }
    })?;
    let label_frame = NumericFrame::new(vec![label.to_string()], label_column)?;
    Ok(NumericFrame::hstack(&[features, label_frame])?.into_matrix())
}
