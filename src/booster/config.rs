use serde::{Serialize, Deserialize};

use crate::{Result, SplitStrategy, TreeBuilder};
use crate::common::checker;

use std::fmt;


/// The learning rate set as default.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
/// The subsample fraction set as default.
pub const DEFAULT_SUBSAMPLE: f64 = 1.0;
/// The number of boosting rounds set as default.
pub const DEFAULT_ROUNDS: usize = 100;


/// Parameters of [`ResidualTrees`](crate::ResidualTrees).
///
/// Every field has a default, so a configuration grid
/// can be stored as JSON with only the fields that differ.
///
/// # Example
/// ```no_run
/// use residual_trees::prelude::*;
///
/// let config = BoostConfig::default()
///     .learning_rate(0.3)
///     .subsample(0.8)
///     .max_depth(3)
///     .min_leaf_size(5)
///     .strategy(SplitStrategy::Randomized)
///     .rounds(200)
///     .seed(1234);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    /// Shrinkage applied to every tree.
    pub learning_rate: f64,
    /// Fraction of the residual samples each tree is fit on.
    pub subsample: f64,
    /// Number of trees [`Booster::run`](crate::Booster::run) grows.
    pub rounds: usize,
    /// Parameters of each tree, including the seed.
    pub tree: TreeBuilder,
}


impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            subsample: DEFAULT_SUBSAMPLE,
            rounds: DEFAULT_ROUNDS,
            tree: TreeBuilder::default(),
        }
    }
}


impl BoostConfig {
    /// Set the learning rate. Default is `0.1`.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }


    /// Set the subsample fraction in `(0, 1]`. Default is `1.0`.
    pub fn subsample(mut self, fraction: f64) -> Self {
        self.subsample = fraction;
        self
    }


    /// Set the number of rounds. Default is `100`.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }


    /// Set the maximal depth of each tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.tree = self.tree.max_depth(depth);
        self
    }


    /// Set the minimal number of samples on each side of a split.
    pub fn min_leaf_size(mut self, size: usize) -> Self {
        self.tree = self.tree.min_leaf_size(size);
        self
    }


    /// Set the split strategy of each tree.
    pub fn strategy(mut self, strategy: SplitStrategy) -> Self {
        self.tree = self.tree.strategy(strategy);
        self
    }


    /// Set the seed for subsampling and randomized splitting.
    pub fn seed(mut self, seed: u64) -> Self {
        self.tree = self.tree.seed(seed);
        self
    }


    /// Check every parameter.
    pub(crate) fn validate(&self) -> Result<()> {
        checker::check_learning_rate(self.learning_rate)?;
        checker::check_fraction("subsample fraction", self.subsample)?;
        Ok(())
    }
}


impl fmt::Display for BoostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lr={} subsample={} rounds={} depth={} leaf={} split={}",
            self.learning_rate,
            self.subsample,
            self.rounds,
            self.tree.max_depth,
            self.tree.min_leaf_size,
            self.tree.strategy,
        )
    }
}
