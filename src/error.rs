//! Error type shared by every fallible operation in this crate.

use thiserror::Error;


/// Errors reported by tree construction, pruning, and boosting.
///
/// All of these are precondition violations:
/// the caller passed data or parameters that the algorithms
/// cannot work with.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A sample set that must contain at least one sample is empty.
    #[error("the sample set is empty")]
    EmptySample,

    /// A sample has an input or output vector of length zero.
    #[error("sample {index} has an empty {field} vector")]
    EmptyVector {
        /// Position of the offending sample.
        index: usize,
        /// Either `"input"` or `"output"`.
        field: &'static str,
    },

    /// A sample's input length differs from the rest of its set.
    #[error("sample {index} has {found} input values, expected {expected}")]
    InputLength {
        /// Position of the offending sample.
        index: usize,
        /// Input length of the first sample.
        expected: usize,
        /// Input length of the offending sample.
        found: usize,
    },

    /// A sample's output length differs from the rest of its set.
    #[error("sample {index} has {found} output values, expected {expected}")]
    OutputLength {
        /// Position of the offending sample.
        index: usize,
        /// Output length of the first sample.
        expected: usize,
        /// Output length of the offending sample.
        found: usize,
    },

    /// The prediction vector and the sample outputs have different lengths.
    #[error("prediction has {found} values, but samples have {expected} outputs")]
    PredictionLength {
        /// Output length of the samples.
        expected: usize,
        /// Length of the prediction vector.
        found: usize,
    },

    /// A boosting round drew zero residual samples.
    #[error("subsample of {n_sample} samples with fraction {fraction} is empty")]
    EmptySubsample {
        /// Number of residual samples.
        n_sample: usize,
        /// Subsample fraction in use.
        fraction: f64,
    },

    /// A configuration value is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error while writing or reading a model.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}


/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, TreeError>;
