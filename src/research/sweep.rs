use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    Sample,
    Booster,
    BoostConfig,
    ResidualTrees,
    Result,
    TreeError,
};
use crate::common::checker;
use super::loss_functions::absolute_loss;

use std::path::Path;
use std::fs::File;
use std::io::BufReader;


/// Outcome of one configuration of a [`sweep`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// The configuration that was run.
    pub config: BoostConfig,
    /// Mean absolute error on the training samples.
    pub train_loss: f64,
    /// Mean absolute error on the validation samples.
    pub validation_loss: f64,
    /// Number of trees in the ensemble.
    pub n_trees: usize,
}


/// Train one [`ResidualTrees`] per configuration on `train`
/// and evaluate it on `validation`.
///
/// Configurations share no mutable state,
/// so they run in parallel on the rayon thread pool.
/// The results are returned in the order of `configs`.
///
/// Returns an error if either sample set is empty or inconsistent,
/// or if `validation` does not share the shape of `train`.
///
/// # Example
/// ```no_run
/// use residual_trees::prelude::*;
/// # let train: Vec<Sample> = Vec::new();
/// # let validation: Vec<Sample> = Vec::new();
///
/// let configs = (1..=8)
///     .map(|leaf| BoostConfig::default().min_leaf_size(leaf).rounds(50))
///     .collect::<Vec<_>>();
/// let results = sweep(&train, &validation, &configs).unwrap();
/// let best = results.iter()
///     .min_by(|a, b| a.validation_loss.total_cmp(&b.validation_loss))
///     .unwrap();
/// println!("best: {}", best.config);
/// ```
pub fn sweep(
    train: &[Sample],
    validation: &[Sample],
    configs: &[BoostConfig],
) -> Result<Vec<SweepResult>>
{
    let (n_feature, n_output) = checker::check_samples(train)?;
    let (n_valid_feature, n_valid_output) = checker::check_samples(validation)?;
    if n_valid_feature != n_feature {
        return Err(TreeError::InputLength {
            index: 0, expected: n_feature, found: n_valid_feature,
        });
    }
    if n_valid_output != n_output {
        return Err(TreeError::OutputLength {
            index: 0, expected: n_output, found: n_valid_output,
        });
    }

    configs.par_iter()
        .map(|&config| -> Result<SweepResult> {
            let mut booster = ResidualTrees::init(train, config)?;
            let f = booster.run()?;

            Ok(SweepResult {
                config,
                train_loss: booster.training_error(),
                validation_loss: absolute_loss(validation, &f),
                n_trees: f.trees().len(),
            })
        })
        .collect::<Result<Vec<_>>>()
}


/// Read a JSON array of [`BoostConfig`] from `path`.
/// Missing fields take their default values.
pub fn load_configs<P>(path: P) -> Result<Vec<BoostConfig>>
    where P: AsRef<Path>
{
    let file = BufReader::new(File::open(path)?);
    let configs = serde_json::from_reader(file)?;
    Ok(configs)
}
