use serde::{Serialize, Deserialize};

use crate::{Regressor, Result, Tree};

use std::path::Path;
use std::fs::File;
use std::io::{BufReader, BufWriter};


/// The frozen output of [`ResidualTrees`](crate::ResidualTrees):
/// a baseline vector plus learning-rate-scaled trees.
/// It can be stored as JSON and read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostedRegressor {
    baseline: Vec<f64>,
    learning_rate: f64,
    trees: Vec<Tree>,
}


impl BoostedRegressor {
    #[inline]
    pub(crate) fn from_components(
        baseline: Vec<f64>,
        learning_rate: f64,
        trees: Vec<Tree>,
    ) -> Self
    {
        Self { baseline, learning_rate, trees, }
    }


    /// Returns the baseline prediction.
    pub fn baseline(&self) -> &[f64] {
        &self.baseline[..]
    }


    /// Returns the learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }


    /// Returns the trees in the order they were added.
    pub fn trees(&self) -> &[Tree] {
        &self.trees[..]
    }


    /// Write `self` to `path` as JSON.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer(file, self)?;
        Ok(())
    }


    /// Read a `BoostedRegressor` written by
    /// [`BoostedRegressor::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let file = BufReader::new(File::open(path)?);
        let regressor = serde_json::from_reader(file)?;
        Ok(regressor)
    }
}


impl Regressor for BoostedRegressor {
    fn predict(&self, input: &[f64]) -> Vec<f64> {
        combine(&self.baseline, self.learning_rate, &self.trees, input)
    }
}


/// `baseline + learning_rate * sum of tree predictions`.
pub(crate) fn combine(
    baseline: &[f64],
    learning_rate: f64,
    trees: &[Tree],
    input: &[f64],
) -> Vec<f64>
{
    let mut result = baseline.to_vec();
    for tree in trees {
        result.iter_mut()
            .zip(tree.predict_ref(input))
            .for_each(|(r, p)| { *r += learning_rate * p; });
    }
    result
}
