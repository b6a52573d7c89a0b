//! Serialization of fitted transformer parameters.
//!
//! This module provides a uniform way to serialize and deserialize the
//! learned parameters of a fitted transformer, without coupling individual
//! transformers to a specific wire format.

use std::error::Error;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain data (e.g., `Vec<f64>`, `Vec<String>`,
/// scalars), not live transformer state.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct DemoParams {
        statistics: Vec<f64>,
        columns: Vec<String>,
    }

    #[test]
    fn test_round_trip() {
        let params = DemoParams {
            statistics: vec![1.5, -2.0],
            columns: vec!["a".to_string(), "b".to_string()],
        };
        let bytes = params.to_bytes().unwrap();
        let restored = DemoParams::from_bytes(&bytes).unwrap();
        assert_eq!(params, restored);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = DemoParams::from_bytes(&[0xff, 0xff, 0xff, 0xff]);
        assert!(result.is_err());
    }
}
