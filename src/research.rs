//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Training loss
//! - Test loss
//!
//! and run many independent configurations in parallel.

/// Defines the round-by-round logger.
pub mod logger;

/// Defines loss functions of a regressor over a sample set.
pub mod loss_functions;

/// Runs independent configurations in parallel.
pub mod sweep;


pub use logger::Logger;

pub use loss_functions::{
    absolute_loss,
    argmax_loss,
};

pub use sweep::{
    SweepResult,
    sweep,
    load_configs,
};
