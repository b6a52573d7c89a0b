//! Standard scaling (z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the per-column mean and `s` the per-column population
//! standard deviation, both computed on the fit data only. Centering can be
//! disabled for sparse-like inputs such as one-hot indicator columns.

use crate::error::TransformError;
use crate::frame::NumericFrame;
use crate::preprocessing::check_columns;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::Axis;
use serde::{Deserialize, Serialize};

/// Configuration for StandardScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerConfig {
    /// If true, center the data before scaling.
    pub with_mean: bool,
    /// If true, scale the data to unit variance.
    pub with_std: bool,
}

impl Default for StandardScalerConfig {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }
}

/// Serializable parameters for a fitted StandardScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Configuration options.
    pub config: StandardScalerConfig,
    /// Mean of each column (zeros if `with_mean` is false).
    pub mean: Vec<f64>,
    /// Scale of each column (ones if `with_std` is false).
    pub scale: Vec<f64>,
    /// Columns seen during fit.
    pub columns: Vec<String>,
}

/// StandardScaler transformer (unfitted).
#[derive(Clone, Default)]
pub struct StandardScaler {
    config: StandardScalerConfig,
}

impl StandardScaler {
    /// Create a new StandardScaler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to center data by mean.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.config.with_mean = with_mean;
        self
    }

    /// Set whether to scale data to unit variance.
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.config.with_std = with_std;
        self
    }
}

impl Transformer for StandardScaler {
    type Input = NumericFrame;
    type Output = NumericFrame;
    type Params = StandardScalerParams;
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError> {
        let (rows, cols) = data.shape();
        if rows == 0 {
            return Err(TransformError::EmptyData(
                "cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        let mean: Vec<f64> = if self.config.with_mean {
            data.data()
                .mean_axis(Axis(0))
                .ok_or_else(|| {
                    TransformError::EmptyData("cannot compute column means".to_string())
                })?
                .to_vec()
        } else {
            vec![0.0; cols]
        };

        // Population standard deviation (ddof = 0); constant columns scale by 1.
        let scale: Vec<f64> = if self.config.with_std {
            data.data()
                .std_axis(Axis(0), 0.0)
                .iter()
                .map(|&s| if s == 0.0 { 1.0 } else { s })
                .collect()
        } else {
            vec![1.0; cols]
        };

        Ok(FittedStandardScaler {
            config: self.config.clone(),
            mean,
            scale,
            columns: data.columns().to_vec(),
        })
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone)]
pub struct FittedStandardScaler {
    config: StandardScalerConfig,
    mean: Vec<f64>,
    scale: Vec<f64>,
    columns: Vec<String>,
}

impl FittedStandardScaler {
    /// Get the mean of each column.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Get the scale of each column.
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Input = NumericFrame;
    type Output = NumericFrame;
    type Params = StandardScalerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        check_columns(&self.columns, data.columns())?;

        let mut out = data.data().clone();
        for ((_, col), v) in out.indexed_iter_mut() {
            if self.config.with_mean {
                *v -= self.mean[col];
            }
            if self.config.with_std {
                *v /= self.scale[col];
            }
        }
        NumericFrame::new(self.columns.clone(), out)
    }

    fn extract_params(&self) -> Self::Params {
        StandardScalerParams {
            config: self.config.clone(),
            mean: self.mean.clone(),
            scale: self.scale.clone(),
            columns: self.columns.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        Ok(Self {
            config: params.config,
            mean: params.mean,
            scale: params.scale,
            columns: params.columns,
        })
    }

    fn input_columns(&self) -> &[String] {
        &self.columns
    }
}
