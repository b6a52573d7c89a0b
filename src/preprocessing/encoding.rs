//! One-hot encoding for categorical features.
//!
//! Each input column's distinct categories observed at fit time become one
//! indicator column each, named `{column}_{category}`. Vocabularies are kept
//! sorted so the output layout is deterministic.

use crate::error::TransformError;
use crate::frame::{CategoryFrame, NumericFrame};
use crate::preprocessing::check_columns;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Strategy for handling categories unseen at fit time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum HandleUnknown {
    /// Raise an error when unseen categories are encountered.
    #[default]
    Error,
    /// Encode unseen categories as all-zero indicators.
    Ignore,
}

/// Serializable parameters for a fitted OneHotEncoder.
#[derive(Clone, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    /// Sorted vocabulary for each input column.
    pub categories: Vec<Vec<String>>,
    /// Columns seen during fit.
    pub columns: Vec<String>,
    /// Handle unknown strategy.
    pub handle_unknown: HandleUnknown,
}

/// One-hot encoder for categorical features (unfitted).
///
/// # Example
/// ```ignore
/// let encoder = OneHotEncoder::new();
/// let fitted = encoder.fit(&frame)?;
/// // Fitting on ["Low", "High", "Low"] yields indicator columns
/// // [col_High, col_Low] and encodes each row accordingly.
/// let encoded = fitted.transform(&frame)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct OneHotEncoder {
    handle_unknown: HandleUnknown,
}

impl OneHotEncoder {
    /// Create a new OneHotEncoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy for handling unseen categories during transform.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }
}

/// Generate indicator column names in vocabulary order.
fn feature_names(columns: &[String], categories: &[Vec<String>]) -> Vec<String> {
    columns
        .iter()
        .zip(categories)
        .flat_map(|(column, vocab)| {
            vocab
                .iter()
                .map(move |category| format!("{}_{}", column, category))
        })
        .collect()
}

impl Transformer for OneHotEncoder {
    type Input = CategoryFrame;
    type Output = NumericFrame;
    type Params = OneHotEncoderParams;
    type Fitted = FittedOneHotEncoder;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError> {
        if data.n_rows() == 0 {
            return Err(TransformError::EmptyData(
                "cannot fit OneHotEncoder on empty data".to_string(),
            ));
        }

        let mut categories = Vec::with_capacity(data.n_columns());
        for (idx, name) in data.columns().iter().enumerate() {
            let mut vocab: BTreeSet<String> = BTreeSet::new();
            for cell in data.column(idx) {
                match cell {
                    Some(value) => {
                        vocab.insert(value.clone());
                    }
                    None => {
                        return Err(TransformError::InvalidValue {
                            column: name.clone(),
                            value: "<missing>".to_string(),
                        })
                    }
                }
            }
            categories.push(vocab.into_iter().collect::<Vec<String>>());
        }

        let names = feature_names(data.columns(), &categories);
        Ok(FittedOneHotEncoder {
            categories,
            columns: data.columns().to_vec(),
            feature_names: names,
            handle_unknown: self.handle_unknown,
        })
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted OneHotEncoder ready for inference.
#[derive(Clone)]
pub struct FittedOneHotEncoder {
    /// Sorted vocabulary for each input column.
    categories: Vec<Vec<String>>,
    /// Input columns seen during fit.
    columns: Vec<String>,
    /// Generated indicator column names.
    feature_names: Vec<String>,
    handle_unknown: HandleUnknown,
}

impl FittedOneHotEncoder {
    /// Get the vocabulary learned for each input column.
    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    /// Get the generated indicator column names.
    pub fn output_columns(&self) -> &[String] {
        &self.feature_names
    }

    /// Get the number of output features (total vocabulary size).
    pub fn n_features_out(&self) -> usize {
        self.feature_names.len()
    }
}

impl FittedTransformer for FittedOneHotEncoder {
    type Input = CategoryFrame;
    type Output = NumericFrame;
    type Params = OneHotEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        check_columns(&self.columns, data.columns())?;

        let n_out = self.n_features_out();
        let mut out = Array2::<f64>::zeros((data.n_rows(), n_out));

        for (row_idx, row) in data.rows().iter().enumerate() {
            let mut offset = 0;
            for (col_idx, cell) in row.iter().enumerate() {
                let vocab = &self.categories[col_idx];
                match cell {
                    Some(value) => match vocab.binary_search(value) {
                        Ok(pos) => out[[row_idx, offset + pos]] = 1.0,
                        Err(_) => {
                            if self.handle_unknown == HandleUnknown::Error {
                                return Err(TransformError::UnseenCategory {
                                    column: self.columns[col_idx].clone(),
                                    value: value.clone(),
                                });
                            }
                            // Ignore leaves the indicators at zero.
                        }
                    },
                    None => {
                        return Err(TransformError::InvalidValue {
                            column: self.columns[col_idx].clone(),
                            value: "<missing>".to_string(),
                        })
                    }
                }
                offset += vocab.len();
            }
        }

        NumericFrame::new(self.feature_names.clone(), out)
    }

    fn extract_params(&self) -> Self::Params {
        OneHotEncoderParams {
            categories: self.categories.clone(),
            columns: self.columns.clone(),
            handle_unknown: self.handle_unknown,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        let names = feature_names(&params.columns, &params.categories);
        Ok(Self {
            categories: params.categories,
            columns: params.columns,
            feature_names: names,
            handle_unknown: params.handle_unknown,
        })
    }

    fn input_columns(&self) -> &[String] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(column: &str, cells: &[&str]) -> CategoryFrame {
        CategoryFrame::new(
            vec![column.to_string()],
            cells.iter().map(|c| vec![Some(c.to_string())]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_one_hot_encoder_vocabulary_sorted() {
        let data = frame("level", &["Low", "High", "Low"]);
        let fitted = OneHotEncoder::new().fit(&data).unwrap();

        assert_eq!(
            fitted.categories(),
            &[vec!["High".to_string(), "Low".to_string()]]
        );
        assert_eq!(
            fitted.output_columns(),
            &["level_High".to_string(), "level_Low".to_string()]
        );
        assert_eq!(fitted.n_features_out(), 2);
    }

    #[test]
    fn test_one_hot_encoder_encodes_indicators() {
        let data = frame("level", &["Low", "High", "Low"]);
        let encoded = OneHotEncoder::new().fit_transform(&data).unwrap();

        // Columns are [level_High, level_Low].
        assert_eq!(encoded.column(0).to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(encoded.column(1).to_vec(), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_one_hot_encoder_multiple_columns() {
        let data = CategoryFrame::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Some("x".to_string()), Some("p".to_string())],
                vec![Some("y".to_string()), Some("q".to_string())],
            ],
        )
        .unwrap();

        let fitted = OneHotEncoder::new().fit(&data).unwrap();
        assert_eq!(fitted.n_features_out(), 4);

        let encoded = fitted.transform(&data).unwrap();
        assert_eq!(encoded.shape(), (2, 4));
        // Row 0: a=x -> [1,0], b=p -> [1,0]
        assert_eq!(
            encoded.data().row(0).to_vec(),
            vec![1.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_one_hot_encoder_unseen_category_error() {
        let train = frame("level", &["Low", "High"]);
        let test = frame("level", &["Medium"]);

        let fitted = OneHotEncoder::new().fit(&train).unwrap();
        let result = fitted.transform(&test);

        assert!(matches!(
            result,
            Err(TransformError::UnseenCategory { column, value })
                if column == "level" && value == "Medium"
        ));
    }

    #[test]
    fn test_one_hot_encoder_unseen_category_ignore() {
        let train = frame("level", &["Low", "High"]);
        let test = frame("level", &["Medium"]);

        let fitted = OneHotEncoder::new()
            .with_handle_unknown(HandleUnknown::Ignore)
            .fit(&train)
            .unwrap();
        let encoded = fitted.transform(&test).unwrap();

        assert_eq!(encoded.data().row(0).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_encoder_rejects_missing_cells() {
        let data = CategoryFrame::new(
            vec!["level".to_string()],
            vec![vec![None]],
        )
        .unwrap();

        let result = OneHotEncoder::new().fit(&data);
        assert!(matches!(result, Err(TransformError::InvalidValue { .. })));
    }

    #[test]
    fn test_one_hot_encoder_empty_data() {
        let data = CategoryFrame::new(vec!["level".to_string()], vec![]).unwrap();
        let result = OneHotEncoder::new().fit(&data);
        assert!(matches!(result, Err(TransformError::EmptyData(_))));
    }

    #[test]
    fn test_one_hot_encoder_column_mismatch() {
        let train = frame("level", &["Low"]);
        let fitted = OneHotEncoder::new().fit(&train).unwrap();

        let other = frame("grade", &["Low"]);
        let result = fitted.transform(&other);
        assert!(matches!(result, Err(TransformError::MissingColumn(_))));
    }

    #[test]
    fn test_one_hot_encoder_serialization() {
        let data = frame("level", &["Low", "High", "Low"]);
        let fitted = OneHotEncoder::new().fit(&data).unwrap();

        let params = fitted.extract_params();
        let restored = FittedOneHotEncoder::from_params(params).unwrap();

        assert_eq!(restored.output_columns(), fitted.output_columns());
        assert_eq!(
            fitted.transform(&data).unwrap(),
            restored.transform(&data).unwrap()
        );
    }

    #[test]
    fn test_one_hot_encoder_save_load_file() {
        let data = frame("level", &["Low", "High"]);
        let fitted = OneHotEncoder::new().fit(&data).unwrap();

        let path = std::env::temp_dir().join("examscore_test_one_hot.bin");
        fitted.save_to_file(&path).unwrap();

        let loaded = FittedOneHotEncoder::load_from_file(&path).unwrap();
        assert_eq!(loaded.categories(), fitted.categories());
        assert_eq!(loaded.n_features_out(), fitted.n_features_out());

        std::fs::remove_file(&path).ok();
    }
}
