//! Feature preprocessing transformers.
//!
//! All transformers follow the same type-state pattern: an unfitted
//! configuration type implementing [`Transformer`], a `Fitted*` type holding
//! the learned statistics (immutable after fit) implementing
//! [`FittedTransformer`], and a serde-derived `*Params` type for persistence.
//!
//! # Available Transformers
//!
//! - [`NumericImputer`]: fill missing numeric values (median, mean, constant)
//! - [`CategoryImputer`]: fill missing categorical values (most frequent)
//! - [`OneHotEncoder`]: expand categorical columns to indicator columns
//! - [`StandardScaler`]: z-score normalization, optionally without centering
//! - [`NumericPipeline`] / [`CategoricalPipeline`]: the fixed per-role chains
//! - [`ColumnPreprocessor`]: the composite that routes each column group
//!   through its pipeline and concatenates the results

use crate::error::TransformError;

pub mod column_preprocessor;
pub mod encoding;
pub mod imputation;
pub mod pipeline;
pub mod scaling;
pub mod traits;

pub use column_preprocessor::{
    ColumnPreprocessor, ColumnPreprocessorParams, FittedColumnPreprocessor,
};
pub use encoding::{FittedOneHotEncoder, HandleUnknown, OneHotEncoder, OneHotEncoderParams};
pub use imputation::{
    CategoryImputer, CategoryImputerParams, FittedCategoryImputer, FittedNumericImputer,
    ImputeStrategy, NumericImputer, NumericImputerParams,
};
pub use pipeline::{
    CategoricalPipeline, CategoricalPipelineParams, FittedCategoricalPipeline,
    FittedNumericPipeline, NumericPipeline, NumericPipelineParams,
};
pub use scaling::{FittedStandardScaler, StandardScaler, StandardScalerConfig, StandardScalerParams};
pub use traits::{FittedTransformer, Transformer};

/// Verify that a frame carries exactly the columns seen during fit, in the
/// same order.
pub(crate) fn check_columns(expected: &[String], got: &[String]) -> Result<(), TransformError> {
    if expected.len() != got.len() {
        return Err(TransformError::ColumnMismatch {
            expected: expected.len(),
            got: got.len(),
        });
    }
    for (expected_name, got_name) in expected.iter().zip(got) {
        if expected_name != got_name {
            return Err(TransformError::MissingColumn(expected_name.clone()));
        }
    }
    Ok(())
}
