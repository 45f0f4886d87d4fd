//! Provides the residual gradient boosting ensemble [`ResidualTrees`].
use rand::prelude::*;
use rand::seq::index;
use rayon::prelude::*;

use crate::{
    Sample,
    Booster,
    Regressor,
    Result,
    TreeError,
    Tree,
    BoostedRegressor,
};
use crate::common::{checker, utils};
use crate::hypothesis::boosted_regressor::combine;
use super::config::BoostConfig;

use std::ops::ControlFlow;


/// Gradient boosting with absolute-error regression trees
/// fit to the residuals of the current ensemble.
///
/// `ResidualTrees` starts from the mean output of the training set
/// (the **baseline**) and keeps one residual sample per training sample,
/// `output - current prediction`.
/// Each call of [`ResidualTrees::add_tree`]
///
/// 1. draws `floor(n * subsample)` residual samples without replacement
///    (all of them when `subsample == 1`),
/// 2. grows one tree over the drawn samples,
/// 3. replaces **every** residual sample `r` with
///    `r.output - learning_rate * tree.predict(r.input)`.
///
/// The prediction is `baseline + learning_rate * sum of tree predictions`.
///
/// # Example
/// ```no_run
/// use residual_trees::prelude::*;
///
/// let train = (0..100)
///     .map(|i| {
///         let x = i as f64 / 10.0;
///         Sample::new(vec![x], vec![x.sin()])
///     })
///     .collect::<Vec<_>>();
///
/// let config = BoostConfig::default()
///     .learning_rate(0.2)
///     .max_depth(3)
///     .min_leaf_size(2)
///     .rounds(50);
/// let mut booster = ResidualTrees::init(&train, config).unwrap();
/// let f = booster.run().unwrap();
///
/// let loss = absolute_loss(&train, &f);
/// println!("L1-loss (train): {loss}");
/// ```
#[derive(Debug, Clone)]
pub struct ResidualTrees {
    // Mean output over the training samples.
    baseline: Vec<f64>,

    // Trees in the order they were added.
    trees: Vec<Tree>,

    // `output - current prediction` for every training sample.
    residuals: Vec<Sample>,

    config: BoostConfig,

    // Drives subsampling and randomized splitting.
    rng: StdRng,
}


impl ResidualTrees {
    /// Initialize the `ResidualTrees`.
    /// This method computes the baseline and the initial residuals.
    ///
    /// Returns an error if `samples` is empty,
    /// the samples have inconsistent shapes,
    /// or `config` holds an out-of-range parameter.
    pub fn init(samples: &[Sample], config: BoostConfig) -> Result<Self> {
        checker::check_samples(samples)?;
        config.validate()?;

        let baseline = utils::mean(samples)?;
        let residuals = samples.par_iter()
            .map(|sample| sample.residual(&baseline, 1f64))
            .collect::<Vec<_>>();

        let rng = StdRng::seed_from_u64(config.tree.seed);

        Ok(Self {
            baseline,
            trees: Vec::with_capacity(config.rounds),
            residuals,
            config,
            rng,
        })
    }


    /// Grow one tree on the current residuals and append it.
    pub fn add_tree(&mut self) -> Result<()> {
        let indices = self.draw_indices()?;
        let tree = self.config.tree
            .build_on(&self.residuals[..], indices, &mut self.rng)?;

        let rate = self.config.learning_rate;
        self.residuals = self.residuals.par_iter()
            .map(|r| r.residual(tree.predict_ref(&r.input), rate))
            .collect::<Vec<_>>();

        self.trees.push(tree);
        Ok(())
    }


    /// Indices of the residual samples the next tree is fit on.
    fn draw_indices(&mut self) -> Result<Vec<usize>> {
        let n_sample = self.residuals.len();
        let fraction = self.config.subsample;

        if fraction >= 1f64 {
            return Ok((0..n_sample).collect());
        }

        let n_draw = (n_sample as f64 * fraction) as usize;
        if n_draw == 0 {
            return Err(TreeError::EmptySubsample { n_sample, fraction, });
        }

        let mut indices = index::sample(&mut self.rng, n_sample, n_draw)
            .into_vec();
        indices.sort_unstable();
        Ok(indices)
    }


    /// Returns the baseline prediction.
    pub fn baseline(&self) -> &[f64] {
        &self.baseline[..]
    }


    /// Returns the trees in the order they were added.
    pub fn trees(&self) -> &[Tree] {
        &self.trees[..]
    }


    /// Returns the current residual samples.
    pub fn residuals(&self) -> &[Sample] {
        &self.residuals[..]
    }


    /// Returns the configuration.
    pub fn config(&self) -> &BoostConfig {
        &self.config
    }


    /// Mean absolute error of the current ensemble on its training set.
    /// This is the mean of the absolute residuals.
    pub fn training_error(&self) -> f64 {
        let n_sample = self.residuals.len() as f64;
        self.residuals.iter()
            .map(|r| r.output.iter().map(|y| y.abs()).sum::<f64>())
            .sum::<f64>()
            / n_sample
    }


    /// Returns a frozen copy of the current ensemble.
    pub fn current_hypothesis(&self) -> BoostedRegressor {
        BoostedRegressor::from_components(
            self.baseline.clone(),
            self.config.learning_rate,
            self.trees.clone(),
        )
    }
}


impl Regressor for ResidualTrees {
    fn predict(&self, input: &[f64]) -> Vec<f64> {
        combine(&self.baseline, self.config.learning_rate, &self.trees, input)
    }
}


impl Booster for ResidualTrees {
    type Output = BoostedRegressor;


    fn name(&self) -> &str {
        "Residual Trees"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_feature, n_output) = self.residuals[0].shape();
        let info = Vec::from([
            ("# of examples", format!("{}", self.residuals.len())),
            ("# of features", format!("{n_feature}")),
            ("# of outputs", format!("{n_output}")),
            ("Learning rate", format!("{}", self.config.learning_rate)),
            ("Subsample", format!("{}", self.config.subsample)),
            ("Rounds", format!("{}", self.config.rounds)),
            ("Max depth", format!("{}", self.config.tree.max_depth)),
            ("Min leaf size", format!("{}", self.config.tree.min_leaf_size)),
            ("Split strategy", format!("{}", self.config.tree.strategy)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        let remaining = self.config.rounds.saturating_sub(self.trees.len());
        self.trees.reserve(remaining);
    }


    fn boost(&mut self, iteration: usize) -> Result<ControlFlow<usize>> {
        if self.trees.len() >= self.config.rounds {
            return Ok(ControlFlow::Break(iteration));
        }

        self.add_tree()?;
        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        self.current_hypothesis()
    }
}
