//! # examscore
//!
//! Feature preprocessing for the student exam-score dataset: turn raw
//! train/test CSV tables into numeric matrices ready for model training,
//! with a persisted transformation artifact for inference-time reuse.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: transformers come in unfitted and fitted
//!   forms; fitted state is an explicit, immutable value produced by `fit`,
//!   so transforming without fitting is unrepresentable in-process.
//! - **Leakage-Free Fitting**: every statistic (median, mean, scale,
//!   vocabulary, most-frequent value) is computed on the train table only
//!   and replayed unchanged on the test table.
//! - **Deterministic Output**: vocabularies are sorted and tie-breaks are
//!   defined, so identical fit state and input always produce identical
//!   matrices.
//!
//! ## Quick Start
//!
//! ```ignore
//! use examscore::{DataTransformation, read_table};
//!
//! let train = read_table("artifacts/train.csv")?;
//! let test = read_table("artifacts/test.csv")?;
//!
//! let result = DataTransformation::new().run(&train, &test, "Exam_Score")?;
//! // result.train / result.test: Array2<f64>, label in the last column.
//! // result.artifact_path: reloadable fitted preprocessor.
//! ```
//!
//! ## Module Structure
//!
//! - `table` — raw tables, typed cells and the CSV loading boundary
//! - `frame` — named numeric/categorical column blocks
//! - `schema` — the fixed student-performance column roles
//! - `preprocessing` — imputers, encoder, scaler, pipelines and the
//!   composite column preprocessor
//! - `transformation` — the train/test orchestration stage
//! - `serialization` — artifact persistence format
//! - `error` — the crate-wide error type

pub mod error;
pub mod frame;
pub mod preprocessing;
pub mod schema;
pub mod serialization;
pub mod table;
pub mod transformation;

pub use error::TransformError;
pub use frame::{CategoryFrame, NumericFrame};
pub use preprocessing::{
    ColumnPreprocessor, FittedColumnPreprocessor, FittedTransformer, HandleUnknown, Transformer,
};
pub use table::{read_table, Table, Value};
pub use transformation::{
    DataTransformation, TransformationConfig, TransformedData,
};
