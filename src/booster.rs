//! Provides the residual boosting algorithm.

mod core;
mod config;
mod residual_trees;


/// Booster trait
pub use self::core::Booster;

pub use self::config::{
    BoostConfig,
    DEFAULT_LEARNING_RATE,
    DEFAULT_SUBSAMPLE,
    DEFAULT_ROUNDS,
};

pub use self::residual_trees::ResidualTrees;
