//! The column preprocessor: one fitted transformation for a mixed table.
//!
//! Routes the declared numeric columns through the numeric pipeline and the
//! declared categorical columns through the categorical pipeline, then
//! concatenates the results column-wise in the fixed order
//! `[numeric block, categorical block]`. All statistics are learned from the
//! fit table only and replayed unchanged on every later transform.

use crate::error::TransformError;
use crate::frame::NumericFrame;
use crate::preprocessing::encoding::HandleUnknown;
use crate::preprocessing::pipeline::{
    CategoricalPipeline, CategoricalPipelineParams, FittedCategoricalPipeline,
    FittedNumericPipeline, NumericPipeline, NumericPipelineParams,
};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::schema;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serializable parameters for a fitted ColumnPreprocessor.
#[derive(Clone, Serialize, Deserialize)]
pub struct ColumnPreprocessorParams {
    /// Numeric pipeline parameters.
    pub numeric: NumericPipelineParams,
    /// Categorical pipeline parameters.
    pub categorical: CategoricalPipelineParams,
}

/// ColumnPreprocessor (unfitted).
///
/// Holds the declarative column role assignment and the two sub-pipelines.
/// Construction is pure; nothing is learned until [`Transformer::fit`].
///
/// # Example
/// ```ignore
/// let preprocessor = ColumnPreprocessor::new();
/// let fitted = preprocessor.fit(&train_table)?;
/// let train = fitted.transform(&train_table)?;
/// let test = fitted.transform(&test_table)?;
/// ```
#[derive(Clone)]
pub struct ColumnPreprocessor {
    numeric: Vec<String>,
    categorical: Vec<String>,
    numeric_pipeline: NumericPipeline,
    categorical_pipeline: CategoricalPipeline,
}

impl Default for ColumnPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop repeated names, keeping first occurrences.
fn dedup_columns(columns: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    columns
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

impl ColumnPreprocessor {
    /// Create a preprocessor for the fixed student-performance schema
    /// ([`schema::NUMERIC_COLUMNS`] and [`schema::CATEGORICAL_COLUMNS`]).
    pub fn new() -> Self {
        Self::with_columns(schema::numeric_columns(), schema::categorical_columns())
    }

    /// Create a preprocessor for custom column lists. Repeated names within a
    /// list collapse to their first occurrence.
    pub fn with_columns(numeric: Vec<String>, categorical: Vec<String>) -> Self {
        Self {
            numeric: dedup_columns(numeric),
            categorical: dedup_columns(categorical),
            numeric_pipeline: NumericPipeline::new(),
            categorical_pipeline: CategoricalPipeline::new(),
        }
    }

    /// Set how categories unseen at fit time are handled during transform.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.categorical_pipeline = self.categorical_pipeline.with_handle_unknown(strategy);
        self
    }

    /// The declared numeric feature columns.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric
    }

    /// The declared categorical feature columns.
    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical
    }
}

impl Transformer for ColumnPreprocessor {
    type Input = Table;
    type Output = NumericFrame;
    type Params = ColumnPreprocessorParams;
    type Fitted = FittedColumnPreprocessor;

    fn fit(&self, table: &Self::Input) -> Result<Self::Fitted, TransformError> {
        if table.n_rows() == 0 {
            return Err(TransformError::EmptyData(
                "cannot fit ColumnPreprocessor on an empty table".to_string(),
            ));
        }

        let numeric_block = table.numeric_frame(&self.numeric)?;
        let category_block = table.category_frame(&self.categorical)?;

        let numeric = self.numeric_pipeline.fit(&numeric_block)?;
        let categorical = self.categorical_pipeline.fit(&category_block)?;

        Ok(FittedColumnPreprocessor::from_pipelines(numeric, categorical))
    }

    fn fit_transform(&self, table: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(table)?;
        fitted.transform(table)
    }
}

/// Fitted ColumnPreprocessor ready for inference.
///
/// Immutable once produced; the output column layout is fully determined by
/// the fit-time state, never by the table being transformed.
#[derive(Clone)]
pub struct FittedColumnPreprocessor {
    numeric: FittedNumericPipeline,
    categorical: FittedCategoricalPipeline,
    input_columns: Vec<String>,
    feature_names: Vec<String>,
}

impl FittedColumnPreprocessor {
    fn from_pipelines(
        numeric: FittedNumericPipeline,
        categorical: FittedCategoricalPipeline,
    ) -> Self {
        let input_columns = numeric
            .input_columns()
            .iter()
            .chain(categorical.input_columns())
            .cloned()
            .collect();
        let feature_names = numeric
            .output_columns()
            .iter()
            .chain(categorical.output_columns())
            .cloned()
            .collect();
        Self {
            numeric,
            categorical,
            input_columns,
            feature_names,
        }
    }

    /// Get the fitted numeric pipeline.
    pub fn numeric_pipeline(&self) -> &FittedNumericPipeline {
        &self.numeric
    }

    /// Get the fitted categorical pipeline.
    pub fn categorical_pipeline(&self) -> &FittedCategoricalPipeline {
        &self.categorical
    }

    /// The output feature names: numeric columns first, then the generated
    /// indicator columns.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// The number of output features.
    pub fn n_features_out(&self) -> usize {
        self.feature_names.len()
    }
}

impl FittedTransformer for FittedColumnPreprocessor {
    type Input = Table;
    type Output = NumericFrame;
    type Params = ColumnPreprocessorParams;

    fn transform(&self, table: &Self::Input) -> Result<Self::Output, TransformError> {
        let numeric_block = table.numeric_frame(self.numeric.input_columns())?;
        let category_block = table.category_frame(self.categorical.input_columns())?;

        let numeric_out = self.numeric.transform(&numeric_block)?;
        let categorical_out = self.categorical.transform(&category_block)?;

        NumericFrame::hstack(&[numeric_out, categorical_out])
    }

    fn extract_params(&self) -> Self::Params {
        ColumnPreprocessorParams {
            numeric: self.numeric.extract_params(),
            categorical: self.categorical.extract_params(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        let numeric = FittedNumericPipeline::from_params(params.numeric)?;
        let categorical = FittedCategoricalPipeline::from_params(params.categorical)?;
        Ok(Self::from_pipelines(numeric, categorical))
    }

    /// Load a fitted preprocessor artifact. A path with no artifact behind it
    /// means no fit has happened yet, which is reported as
    /// [`TransformError::NotFitted`] rather than a plain I/O error.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TransformError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TransformError::NotFitted(format!(
                    "no fitted preprocessor artifact at {}",
                    path.as_ref().display()
                ))
            } else {
                TransformError::IoError(e.to_string())
            }
        })?;
        let params = <Self::Params as crate::serialization::SerializableParams>::from_bytes(&bytes)
            .map_err(|e| TransformError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }

    fn input_columns(&self) -> &[String] {
        &self.input_columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn small_preprocessor() -> ColumnPreprocessor {
        ColumnPreprocessor::with_columns(names(&["Hours_Studied"]), names(&["School_Type"]))
    }

    fn small_table() -> Table {
        Table::from_rows(
            names(&["Hours_Studied", "School_Type", "Exam_Score"]),
            vec![
                vec![Value::from(10.0), Value::from("Public"), Value::from(70.0)],
                vec![Value::Missing, Value::from("Private"), Value::from(85.0)],
                vec![Value::from(30.0), Value::from("Public"), Value::from(90.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_schema_lists() {
        let preprocessor = ColumnPreprocessor::new();
        assert_eq!(preprocessor.numeric_columns().len(), 6);
        assert_eq!(preprocessor.categorical_columns().len(), 13);
        assert_eq!(preprocessor.numeric_columns()[0], "Hours_Studied");
        assert_eq!(preprocessor.categorical_columns()[0], "Gender");
    }

    #[test]
    fn test_with_columns_dedup() {
        let preprocessor = ColumnPreprocessor::with_columns(
            names(&["a", "b", "a"]),
            names(&["Gender", "School_Type", "Gender"]),
        );
        assert_eq!(preprocessor.numeric_columns(), &names(&["a", "b"]));
        assert_eq!(
            preprocessor.categorical_columns(),
            &names(&["Gender", "School_Type"])
        );
    }

    #[test]
    fn test_fit_transform_shape_and_names() {
        let table = small_table();
        let fitted = small_preprocessor().fit(&table).unwrap();

        // 1 numeric column + 2 categories = 3 output features.
        assert_eq!(fitted.n_features_out(), 3);
        assert_eq!(
            fitted.feature_names(),
            &[
                "Hours_Studied".to_string(),
                "School_Type_Private".to_string(),
                "School_Type_Public".to_string()
            ]
        );

        let out = fitted.transform(&table).unwrap();
        assert_eq!(out.shape(), (3, 3));
    }

    #[test]
    fn test_column_count_invariant() {
        let table = Table::from_rows(
            names(&["n1", "n2", "c1", "c2"]),
            vec![
                vec![
                    Value::from(1.0),
                    Value::from(5.0),
                    Value::from("x"),
                    Value::from("p"),
                ],
                vec![
                    Value::from(2.0),
                    Value::from(6.0),
                    Value::from("y"),
                    Value::from("q"),
                ],
                vec![
                    Value::from(3.0),
                    Value::from(7.0),
                    Value::from("z"),
                    Value::from("p"),
                ],
            ],
        )
        .unwrap();

        let preprocessor =
            ColumnPreprocessor::with_columns(names(&["n1", "n2"]), names(&["c1", "c2"]));
        let fitted = preprocessor.fit(&table).unwrap();

        // 2 numeric + (3 categories in c1 + 2 in c2) = 7.
        assert_eq!(fitted.n_features_out(), 7);
        assert_eq!(fitted.transform(&table).unwrap().n_columns(), 7);
    }

    #[test]
    fn test_transform_deterministic() {
        let table = small_table();
        let fitted = small_preprocessor().fit(&table).unwrap();

        let first = fitted.transform(&table).unwrap();
        let second = fitted.transform(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_transform_matches_fit_then_transform() {
        let table = small_table();
        let preprocessor = small_preprocessor();

        let direct = preprocessor.fit_transform(&table).unwrap();
        let fitted = preprocessor.fit(&table).unwrap();
        assert_eq!(direct, fitted.transform(&table).unwrap());
    }

    #[test]
    fn test_fit_missing_required_column() {
        let table = Table::from_rows(
            names(&["School_Type"]),
            vec![vec![Value::from("Public")]],
        )
        .unwrap();

        let result = small_preprocessor().fit(&table);
        assert!(
            matches!(result, Err(TransformError::MissingColumn(name)) if name == "Hours_Studied")
        );
    }

    #[test]
    fn test_transform_missing_required_column() {
        let fitted = small_preprocessor().fit(&small_table()).unwrap();

        let table = Table::from_rows(
            names(&["Hours_Studied"]),
            vec![vec![Value::from(1.0)]],
        )
        .unwrap();

        let result = fitted.transform(&table);
        assert!(matches!(result, Err(TransformError::MissingColumn(_))));
    }

    #[test]
    fn test_fit_empty_table() {
        let table = Table::from_rows(names(&["Hours_Studied", "School_Type"]), vec![]).unwrap();
        let result = small_preprocessor().fit(&table);
        assert!(matches!(result, Err(TransformError::EmptyData(_))));
    }

    #[test]
    fn test_unseen_category_propagates() {
        let fitted = small_preprocessor().fit(&small_table()).unwrap();

        let table = Table::from_rows(
            names(&["Hours_Studied", "School_Type"]),
            vec![vec![Value::from(15.0), Value::from("Charter")]],
        )
        .unwrap();

        let result = fitted.transform(&table);
        assert!(matches!(
            result,
            Err(TransformError::UnseenCategory { column, value })
                if column == "School_Type" && value == "Charter"
        ));
    }

    #[test]
    fn test_unseen_category_ignored_when_configured() {
        let fitted = small_preprocessor()
            .with_handle_unknown(HandleUnknown::Ignore)
            .fit(&small_table())
            .unwrap();

        let table = Table::from_rows(
            names(&["Hours_Studied", "School_Type"]),
            vec![vec![Value::from(15.0), Value::from("Charter")]],
        )
        .unwrap();

        let out = fitted.transform(&table).unwrap();
        assert_eq!(out.data()[[0, 1]], 0.0);
        assert_eq!(out.data()[[0, 2]], 0.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let table = small_table();
        let fitted = small_preprocessor().fit(&table).unwrap();

        let path = std::env::temp_dir().join("examscore_test_column_preprocessor.bin");
        fitted.save_to_file(&path).unwrap();

        let loaded = FittedColumnPreprocessor::load_from_file(&path).unwrap();
        assert_eq!(loaded.feature_names(), fitted.feature_names());
        assert_eq!(
            fitted.transform(&table).unwrap(),
            loaded.transform(&table).unwrap()
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_without_prior_fit_is_not_fitted() {
        let path = std::env::temp_dir().join("examscore_test_never_saved.bin");
        std::fs::remove_file(&path).ok();

        let result = FittedColumnPreprocessor::load_from_file(&path);
        assert!(matches!(result, Err(TransformError::NotFitted(_))));
    }

    #[test]
    fn test_params_round_trip() {
        let table = small_table();
        let fitted = small_preprocessor().fit(&table).unwrap();

        let params = fitted.extract_params();
        let restored = FittedColumnPreprocessor::from_params(params).unwrap();

        assert_eq!(restored.feature_names(), fitted.feature_names());
        assert_eq!(restored.input_columns(), fitted.input_columns());
        assert_eq!(
            fitted.transform(&table).unwrap(),
            restored.transform(&table).unwrap()
        );
    }

    #[test]
    fn test_output_ignores_extra_columns() {
        // Columns outside the declared lists (like the label) never leak into
        // the feature blocks.
        let table = small_table();
        let fitted = small_preprocessor().fit(&table).unwrap();
        let out = fitted.transform(&table).unwrap();

        assert!(!out.columns().iter().any(|c| c == "Exam_Score"));
    }
}
