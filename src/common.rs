//! Defines some common functions used in this library.

/// Defines the mean / absolute error utilities and argmax helpers.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
