//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready for inference and serialization.

use crate::error::TransformError;
use crate::serialization::SerializableParams;

/// Trait for unfitted transformers with hyperparameters.
///
/// A transformer learns parameters from training data and can then transform
/// new data using those learned parameters. This trait represents the
/// configurable, unfitted state.
///
/// # Type Parameters
/// - `Input`: Input data type (a [`NumericFrame`](crate::frame::NumericFrame)
///   or [`CategoryFrame`](crate::frame::CategoryFrame), or a raw
///   [`Table`](crate::table::Table) for the composite preprocessor).
/// - `Output`: Output data type after transformation.
/// - `Params`: Serializable representation of learned parameters.
/// - `Fitted`: The corresponding fitted transformer type.
pub trait Transformer: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<
        Params = Self::Params,
        Input = Self::Input,
        Output = Self::Output,
    >;

    /// Fit the transformer to the training data.
    ///
    /// Learns parameters (e.g., per-column medians for the numeric imputer)
    /// from the data. Fitting either fully succeeds, yielding an immutable
    /// fitted value, or fails without producing any state.
    ///
    /// # Errors
    /// Returns [`TransformError`] if:
    /// - The data is empty
    /// - A column has no observed values where a statistic requires one
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, TransformError>;

    /// Fit the transformer and transform the data in one step.
    ///
    /// Equivalent to `fit` followed by `transform` on the same data.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError>;
}

/// Trait for fitted transformers ready for inference.
///
/// After fitting, a transformer contains learned statistics (e.g., medians
/// and vocabularies) and can transform new data. Fitted state is immutable;
/// the same fitted value applied to the same input always produces the same
/// output. It can also be serialized and deserialized for deployment.
///
/// # Guarantees
/// - `extract_params()` + `from_params()` is a round-trip.
/// - `save_to_file` / `load_from_file` are cross-platform compatible.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`TransformError`] if:
    /// - The input columns do not match the columns seen during fit
    /// - The input contains values the fitted state cannot encode
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, TransformError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, TransformError>
    where
        Self: Sized;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TransformError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| TransformError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }

    /// The column names this transformer was fitted on, in order.
    fn input_columns(&self) -> &[String];
}
