#![warn(missing_docs)]

//!
//! A crate that provides binary regression trees
//! and a residual gradient boosting ensemble over them.
//!
//! This crate includes the following pieces.
//!
//! - Regression trees
//!     A tree is grown recursively by a [`SplitStrategy`].
//!     [`SplitStrategy::Exhaustive`] evaluates every midpoint threshold
//!     and keeps the one with the smallest weighted absolute error,
//!     while [`SplitStrategy::Randomized`] accepts the first feasible
//!     candidate in a random order.
//!     A grown tree can be pruned against a held-out validation set.
//!
//!
//! - Residual boosting
//!     [`ResidualTrees`] starts from the mean output of the training set
//!     and repeatedly fits a tree to the current residuals.
//!     The prediction is the baseline plus
//!     the learning-rate-scaled sum of the tree predictions.
//!
//! # Example
//! ```no_run
//! use residual_trees::prelude::*;
//!
//! let train = vec![
//!     Sample::new(vec![0.0], vec![0.0]),
//!     Sample::new(vec![1.0], vec![0.0]),
//!     Sample::new(vec![2.0], vec![10.0]),
//!     Sample::new(vec![3.0], vec![10.0]),
//! ];
//!
//! let config = BoostConfig::default()
//!     .learning_rate(0.5)
//!     .min_leaf_size(1)
//!     .rounds(10);
//! let mut booster = ResidualTrees::init(&train, config).unwrap();
//! booster.run().unwrap();
//!
//! let prediction = booster.predict(&[2.5]);
//! println!("prediction: {prediction:?}");
//! ```

pub mod error;
pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod tree;
pub mod booster;
pub mod research;
pub mod prelude;


pub use error::{TreeError, Result};

pub use sample::{
    Sample,
    Dataset,
    train_validation_split,
};

pub use common::utils::{
    mean,
    mean_absolute_error,
    argmax,
    argmax_error,
};

pub use hypothesis::{
    Regressor,
    BoostedRegressor,
};

pub use tree::{
    Node,
    Splitter,
    LeftRight,
    SplitStrategy,
    Tree,
    TreeBuilder,
};

pub use booster::{
    Booster,
    BoostConfig,
    ResidualTrees,
};

pub use research::{
    Logger,
    SweepResult,
    sweep,
    load_configs,
    absolute_loss,
    argmax_loss,
};
