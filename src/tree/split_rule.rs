//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// `input[feature] < threshold`
    Left,
    /// `input[feature] >= threshold`
    Right,
}


/// A `(feature, threshold)` pair stored in a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// Index of the feature to compare.
    pub feature: usize,
    /// Samples with `input[feature] < threshold` go left.
    pub threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, input: &[f64]) -> LeftRight {
        if input[self.feature] < self.threshold {
            LeftRight::Left
        } else {
            LeftRight::Right
        }
    }


    /// Partition `indices` into the samples that go left and right.
    pub(crate) fn partition(&self, samples: &[Sample], indices: Vec<usize>)
        -> (Vec<usize>, Vec<usize>)
    {
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices.into_iter() {
            match self.split(&samples[i].input) {
                LeftRight::Left  => { lindices.push(i); },
                LeftRight::Right => { rindices.push(i); },
            }
        }
        (lindices, rindices)
    }


    /// Returns the number of samples that go left and right.
    pub(crate) fn counts(&self, samples: &[Sample], indices: &[usize])
        -> (usize, usize)
    {
        let n_left = indices.iter()
            .filter(|&&i| self.split(&samples[i].input) == LeftRight::Left)
            .count();
        (n_left, indices.len() - n_left)
    }
}
