//! The two fixed sub-pipelines of the column preprocessor.
//!
//! - [`NumericPipeline`]: impute missing values by median, then standardize.
//! - [`CategoricalPipeline`]: impute missing values by most frequent value,
//!   one-hot encode, then standardize by scale only (centering one-hot
//!   indicators would densify them into negative values).

use crate::error::TransformError;
use crate::frame::{CategoryFrame, NumericFrame};
use crate::preprocessing::encoding::{
    FittedOneHotEncoder, HandleUnknown, OneHotEncoder, OneHotEncoderParams,
};
use crate::preprocessing::imputation::{
    CategoryImputer, CategoryImputerParams, FittedCategoryImputer, FittedNumericImputer,
    NumericImputer, NumericImputerParams,
};
use crate::preprocessing::scaling::{FittedStandardScaler, StandardScaler, StandardScalerParams};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted NumericPipeline.
#[derive(Clone, Serialize, Deserialize)]
pub struct NumericPipelineParams {
    /// Imputer stage parameters.
    pub imputer: NumericImputerParams,
    /// Scaler stage parameters.
    pub scaler: StandardScalerParams,
}

/// Numeric sub-pipeline (unfitted): median imputation followed by
/// standardization.
#[derive(Clone, Default)]
pub struct NumericPipeline {
    imputer: NumericImputer,
    scaler: StandardScaler,
}

impl NumericPipeline {
    /// Create the default pipeline: median imputation, full standardization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the imputer stage.
    pub fn with_imputer(mut self, imputer: NumericImputer) -> Self {
        self.imputer = imputer;
        self
    }

    /// Replace the scaler stage.
    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = scaler;
        self
    }
}

impl Transformer for NumericPipeline {
    type Input = NumericFrame;
    type Output = NumericFrame;
    type Params = NumericPipelineParams;
    type Fitted = FittedNumericPipeline;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError> {
        let imputer = self.imputer.fit(data)?;
        let imputed = imputer.transform(data)?;
        let scaler = self.scaler.fit(&imputed)?;
        Ok(FittedNumericPipeline { imputer, scaler })
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted numeric sub-pipeline.
#[derive(Clone)]
pub struct FittedNumericPipeline {
    imputer: FittedNumericImputer,
    scaler: FittedStandardScaler,
}

impl FittedNumericPipeline {
    /// Get the fitted imputer stage.
    pub fn imputer(&self) -> &FittedNumericImputer {
        &self.imputer
    }

    /// Get the fitted scaler stage.
    pub fn scaler(&self) -> &FittedStandardScaler {
        &self.scaler
    }

    /// The output column names (same as the input for this pipeline).
    pub fn output_columns(&self) -> &[String] {
        self.scaler.input_columns()
    }
}

impl FittedTransformer for FittedNumericPipeline {
    type Input = NumericFrame;
    type Output = NumericFrame;
    type Params = NumericPipelineParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let imputed = self.imputer.transform(data)?;
        self.scaler.transform(&imputed)
    }

    fn extract_params(&self) -> Self::Params {
        NumericPipelineParams {
            imputer: self.imputer.extract_params(),
            scaler: self.scaler.extract_params(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        Ok(Self {
            imputer: FittedNumericImputer::from_params(params.imputer)?,
            scaler: FittedStandardScaler::from_params(params.scaler)?,
        })
    }

    fn input_columns(&self) -> &[String] {
        self.imputer.input_columns()
    }
}

/// Serializable parameters for a fitted CategoricalPipeline.
#[derive(Clone, Serialize, Deserialize)]
pub struct CategoricalPipelineParams {
    /// Imputer stage parameters.
    pub imputer: CategoryImputerParams,
    /// Encoder stage parameters.
    pub encoder: OneHotEncoderParams,
    /// Scaler stage parameters.
    pub scaler: StandardScalerParams,
}

/// Categorical sub-pipeline (unfitted): most-frequent imputation, one-hot
/// encoding, then scale-only standardization.
#[derive(Clone)]
pub struct CategoricalPipeline {
    imputer: CategoryImputer,
    encoder: OneHotEncoder,
    scaler: StandardScaler,
}

impl Default for CategoricalPipeline {
    fn default() -> Self {
        Self {
            imputer: CategoryImputer::new(),
            encoder: OneHotEncoder::new(),
            scaler: StandardScaler::new().with_mean(false),
        }
    }
}

impl CategoricalPipeline {
    /// Create the default pipeline: most-frequent imputation, one-hot
    /// encoding, scale without centering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the encoder handles categories unseen at fit time.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.encoder = self.encoder.with_handle_unknown(strategy);
        self
    }
}

impl Transformer for CategoricalPipeline {
    type Input = CategoryFrame;
    type Output = NumericFrame;
    type Params = CategoricalPipelineParams;
    type Fitted = FittedCategoricalPipeline;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError> {
        let imputer = self.imputer.fit(data)?;
        let imputed = imputer.transform(data)?;
        let encoder = self.encoder.fit(&imputed)?;
        let encoded = encoder.transform(&imputed)?;
        let scaler = self.scaler.fit(&encoded)?;
        Ok(FittedCategoricalPipeline {
            imputer,
            encoder,
            scaler,
        })
    }

    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted categorical sub-pipeline.
#[derive(Clone)]
pub struct FittedCategoricalPipeline {
    imputer: FittedCategoryImputer,
    encoder: FittedOneHotEncoder,
    scaler: FittedStandardScaler,
}

impl FittedCategoricalPipeline {
    /// Get the fitted imputer stage.
    pub fn imputer(&self) -> &FittedCategoryImputer {
        &self.imputer
    }

    /// Get the fitted encoder stage.
    pub fn encoder(&self) -> &FittedOneHotEncoder {
        &self.encoder
    }

    /// Get the fitted scaler stage.
    pub fn scaler(&self) -> &FittedStandardScaler {
        &self.scaler
    }

    /// The generated indicator column names.
    pub fn output_columns(&self) -> &[String] {
        self.encoder.output_columns()
    }

    /// The number of output features (total vocabulary size).
    pub fn n_features_out(&self) -> usize {
        self.encoder.n_features_out()
    }
}

impl FittedTransformer for FittedCategoricalPipeline {
    type Input = CategoryFrame;
    type Output = NumericFrame;
    type Params = CategoricalPipelineParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError> {
        let imputed = self.imputer.transform(data)?;
        let encoded = self.encoder.transform(&imputed)?;
        self.scaler.transform(&encoded)
    }

    fn extract_params(&self) -> Self::Params {
        CategoricalPipelineParams {
            imputer: self.imputer.extract_params(),
            encoder: self.encoder.extract_params(),
            scaler: self.scaler.extract_params(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, TransformError> {
        Ok(Self {
            imputer: FittedCategoryImputer::from_params(params.imputer)?,
            encoder: FittedOneHotEncoder::from_params(params.encoder)?,
            scaler: FittedStandardScaler::from_params(params.scaler)?,
        })
    }

    fn input_columns(&self) -> &[String] {
        self.imputer.input_columns()
    }
}
