use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Sample, Result, TreeError};
use crate::common::{
    checker,
    utils::{mean, mean_absolute_error},
};
use super::{
    node::Node,
    regressor::Tree,
    strategy::SplitStrategy,
};

use std::fmt;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 5;
/// The minimal number of samples per leaf set as default.
pub const DEFAULT_MIN_LEAF_SIZE: usize = 1;
/// The seed for randomized splitting set as default.
pub const DEFAULT_SEED: u64 = 0;


/// A struct that builds [`Tree`].
/// `TreeBuilder` keeps parameters for constructing `Tree`.
///
/// A node becomes a leaf when it holds at most `2 * min_leaf_size`
/// samples, when it sits at `max_depth`,
/// or when the [`SplitStrategy`] finds no split for it.
///
/// # Example
///
/// ```no_run
/// use residual_trees::prelude::*;
///
/// let samples = vec![
///     Sample::new(vec![0.0], vec![0.0]),
///     Sample::new(vec![1.0], vec![0.0]),
///     Sample::new(vec![2.0], vec![10.0]),
///     Sample::new(vec![3.0], vec![10.0]),
/// ];
/// let tree = TreeBuilder::new()
///     .max_depth(3)
///     .min_leaf_size(1)
///     .strategy(SplitStrategy::Exhaustive)
///     .build(&samples)
///     .unwrap();
/// assert_eq!(tree.predict(&[0.5]), vec![0.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeBuilder {
    pub(crate) max_depth: usize,
    pub(crate) min_leaf_size: usize,
    pub(crate) strategy: SplitStrategy,
    pub(crate) seed: u64,
}


impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl TreeBuilder {
    /// Construct a new instance of `TreeBuilder`.
    /// By default,
    /// `TreeBuilder` sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 5,
    /// min_leaf_size: DEFAULT_MIN_LEAF_SIZE == 1,
    /// strategy: SplitStrategy::Exhaustive,
    /// seed: DEFAULT_SEED == 0,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_leaf_size: DEFAULT_MIN_LEAF_SIZE,
            strategy: SplitStrategy::default(),
            seed: DEFAULT_SEED,
        }
    }


    /// Specify the maximal depth of the tree.
    /// A depth of `0` yields a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Specify the minimal number of samples on each side of a split.
    pub fn min_leaf_size(mut self, size: usize) -> Self {
        self.min_leaf_size = size;
        self
    }


    /// Specify the split strategy.
    /// Default is `SplitStrategy::Exhaustive`.
    pub fn strategy(mut self, strategy: SplitStrategy) -> Self {
        self.strategy = strategy;
        self
    }


    /// Set the seed of the RNG used by `SplitStrategy::Randomized`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Build a `Tree` over `samples`.
    ///
    /// Returns an error if `samples` is empty
    /// or the samples do not share the same input/output lengths.
    pub fn build(&self, samples: &[Sample]) -> Result<Tree> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        checker::check_samples(samples)?;

        let indices = (0..samples.len()).collect::<Vec<_>>();
        self.build_on(samples, indices, &mut rng)
    }


    /// Build a `Tree` over the samples at `indices`,
    /// drawing randomness from `rng`.
    /// The shapes of `samples` must be checked by the caller.
    pub(crate) fn build_on<R>(
        &self,
        samples: &[Sample],
        indices: Vec<usize>,
        rng: &mut R,
    ) -> Result<Tree>
        where R: Rng + ?Sized,
    {
        let first = indices.first()
            .ok_or(TreeError::EmptySample)?;
        let (n_feature, n_output) = samples[*first].shape();

        let root = self.grow(samples, indices, 0, rng)?;
        Ok(Tree::from_components(root, n_feature, n_output))
    }


    fn grow<R>(
        &self,
        samples: &[Sample],
        indices: Vec<usize>,
        depth: usize,
        rng: &mut R,
    ) -> Result<Box<Node>>
        where R: Rng + ?Sized,
    {
        // Compute the mean prediction and its error on this node.
        let prediction = mean(indices.iter().map(|&i| &samples[i]))?;
        let error = mean_absolute_error(
            &prediction, indices.iter().map(|&i| &samples[i])
        )?;


        let too_small = indices.len() <= self.min_leaf_size.saturating_mul(2);
        if too_small || depth >= self.max_depth {
            return Ok(Box::new(Node::leaf(prediction, error)));
        }


        // Find the splitting rule.
        let splitter = self.strategy.find_split(
            samples, &indices[..], self.min_leaf_size, error, rng,
        )?;
        let Some(splitter) = splitter else {
            return Ok(Box::new(Node::leaf(prediction, error)));
        };


        // Split the train data for left/right childrens
        let (lindices, rindices) = splitter.partition(samples, indices);

        let ltree = self.grow(samples, lindices, depth + 1, rng)?;
        let rtree = self.grow(samples, rindices, depth + 1, rng)?;

        Ok(Box::new(Node::branch(splitter, ltree, rtree, prediction, error)))
    }
}


impl fmt::Display for TreeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Regression Tree\n\n\
            - Max depth: {}\n\
            - Min leaf size: {}\n\
            - Split strategy: {}\n\
            ----------\
            ",
            self.max_depth,
            self.min_leaf_size,
            self.strategy,
        )
    }
}
