//! Imputation transformers for completing missing values.
//!
//! Numeric columns carry missing values as NaN and are filled from a
//! per-column statistic; categorical columns carry missing values as `None`
//! and are filled with the most frequent fit-time value.

use crate::error::TransformError;
use crate::frame::{CategoryFrame, NumericFrame};
use crate::preprocessing::check_columns;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strategy for imputing missing numeric values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum ImputeStrategy {
    /// Replace missing values with the median of each column.
    #[default]
    Median,
    /// Replace missing values with the mean of each column.
    Mean,
    /// Replace missing values with a constant value.
    Constant(f64),
}

/// Serializable parameters for a fitted NumericImputer.
#[derive(Clone, Serialize, Deserialize)]
pub struct NumericImputerParams {
    /// Strategy used for imputation.
    pub strategy: ImputeStrategy,
    /// Fill value for each column.
    pub statistics: Vec<f64>,
    /// Columns seen during fit.
    pub columns: Vec<String>,
}

/// NumericImputer transformer (unfitted).
///
/// Fills NaN cells with a per-column statistic computed at fit time.
#[derive(Clone)]
pub struct NumericImputer {
    strategy: ImputeStrategy,
}

impl Default for NumericImputer {
    fn default() -> Self {
        Self::new(ImputeStrategy::default())
    }
}

impl NumericImputer {
    /// Create a new NumericImputer with the specified strategy.
    pub fn new(strategy: ImputeStrategy) -> Self {
        Self { strategy }
    }
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    }
}

impl Transformer for NumericImputer {
    type Input = NumericFrame;
    type Output = NumericFrame;
    type Params = NumericImputerParams;
    type Fitted = FittedNumericImputer;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError> {
        if data.n_rows() == 0 {
            return Err(TransformError::EmptyData(
                "cannot fit NumericImputer on empty data".to_string(),
            ));
        }

        let mut statistics = Vec::with_capacity(data.n_columns());
        for (idx, name) in data.columns().iter().enumerate() {
            let mut observed: Vec<f64> = data
                .column(idx)
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .collect();

            let stat = match &self.strategy {
                ImputeStrategy::Constant(v) => *v,
                ImputeStrategy::Median | ImputeStrategy::Mean if observed.is_empty() => {
                    return Err(TransformError::EmptyColumn(name.clone()));
                }
                ImputeStrategy::Median => median(&mut observed),
                ImputeStrategy::Mean => observed.iter().sum::<f64>() / observed.len() as f64,
            };
            statistics.push(stat);
        }

        Ok(FittedNumericImputer {
            strategy: self.strategy.clone(),
            statistics,
            columns: data.columns().to_vec(),
        })
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted NumericImputer ready for inference.
#[derive(Clone)]
pub struct FittedNumericImputer {
    strategy: ImputeStrategy,
    statistics: Vec<f64>,
    columns: Vec<String>,
}

impl FittedNumericImputer {
    /// Get the fill value for each column.
    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }
}

impl FittedTransformer for FittedNumericImputer {
    type Input = NumericFrame;
    type Output = NumericFrame;
    type Params = NumericImputerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        check_columns(&self.columns, data.columns())?;

        let mut out = data.data().clone();
        for ((_, col), v) in out.indexed_iter_mut() {
            if v.is_nan() {
                *v = self.statistics[col];
            }
        }
        NumericFrame::new(self.columns.clone(), out)
    }

    fn extract_params(&self) -> Self::Params {
        NumericImputerParams {
            strategy: self.strategy.clone(),
            statistics: self.statistics.clone(),
            columns: self.columns.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        Ok(Self {
            strategy: params.strategy,
            statistics: params.statistics,
            columns: params.columns,
        })
    }

    fn input_columns(&self) -> &[String] {
        &self.columns
    }
}

/// Serializable parameters for a fitted CategoryImputer.
#[derive(Clone, Serialize, Deserialize)]
pub struct CategoryImputerParams {
    /// Fill value for each column.
    pub fill_values: Vec<String>,
    /// Columns seen during fit.
    pub columns: Vec<String>,
}

/// CategoryImputer transformer (unfitted).
///
/// Fills missing category cells with the most frequent value observed at fit
/// time. Ties resolve to the lexicographically smallest candidate.
#[derive(Clone, Default)]
pub struct CategoryImputer;

impl CategoryImputer {
    /// Create a new CategoryImputer.
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for CategoryImputer {
    type Input = CategoryFrame;
    type Output = CategoryFrame;
    type Params = CategoryImputerParams;
    type Fitted = FittedCategoryImputer;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError> {
        if data.n_rows() == 0 {
            return Err(TransformError::EmptyData(
                "cannot fit CategoryImputer on empty data".to_string(),
            ));
        }

        let mut fill_values = Vec::with_capacity(data.n_columns());
        for (idx, name) in data.columns().iter().enumerate() {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for cell in data.column(idx) {
                if let Some(value) = cell {
                    *counts.entry(value.as_str()).or_insert(0) += 1;
                }
            }

            // BTreeMap iterates keys in ascending order, so a strictly-greater
            // update keeps the lexicographically smallest value on ties.
            let mut best: Option<(&str, usize)> = None;
            for (value, count) in counts {
                if best.map_or(true, |(_, best_count)| count > best_count) {
                    best = Some((value, count));
                }
            }

            match best {
                Some((value, _)) => fill_values.push(value.to_string()),
                None => return Err(TransformError::EmptyColumn(name.clone())),
            }
        }

        Ok(FittedCategoryImputer {
            fill_values,
            columns: data.columns().to_vec(),
        })
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted CategoryImputer ready for inference.
#[derive(Clone)]
pub struct FittedCategoryImputer {
    fill_values: Vec<String>,
    columns: Vec<String>,
}

impl FittedCategoryImputer {
    /// Get the fill value for each column.
    pub fn fill_values(&self) -> &[String] {
        &self.fill_values
    }
}

impl FittedTransformer for FittedCategoryImputer {
    type Input = CategoryFrame;
    type Output = CategoryFrame;
    type Params = CategoryImputerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        check_columns(&self.columns, data.columns())?;

        let rows = data
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        Some(value) => Some(value.clone()),
                        None => Some(self.fill_values[col].clone()),
                    })
                    .collect()
            })
            .collect();
        CategoryFrame::new(self.columns.clone(), rows)
    }

    fn extract_params(&self) -> Self::Params {
        CategoryImputerParams {
            fill_values: self.fill_values.clone(),
            columns: self.columns.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        Ok(Self {
            fill_values: params.fill_values,
            columns: params.columns,
        })
    }

    fn input_columns(&self) -> &[String] {
        &self.columns
    }
}
