//! Struct `Sample` represents one `(input, output)` pair.
//! Struct `Dataset` bundles named train/test sets of samples.

// Provides sample struct.
pub(crate) mod sample_struct;
// Provides a named train/test pair and the holdout split.
pub(crate) mod dataset;


pub use sample_struct::Sample;
pub use dataset::{
    Dataset,
    train_validation_split,
};
