//! Split search strategies.
use rand::prelude::*;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Sample, Result};
use crate::common::utils::{mean, mean_absolute_error};
use super::split_rule::Splitter;

use std::fmt;


/// The rule that picks the `(feature, threshold)` pair of a node.
///
/// For every feature, the candidate thresholds are the midpoints
/// of adjacent distinct values among the samples at the node.
/// A candidate is feasible when both sides of the split
/// hold at least `min_leaf_size` samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Evaluate every candidate and keep the one with the smallest
    /// size-weighted absolute error of the two children.
    /// The node is split only if that error is strictly smaller than
    /// the error of the node itself.
    /// Ties go to the smallest feature index, then the smallest threshold.
    #[default]
    Exhaustive,


    /// Shuffle the features and, within each feature,
    /// the distinct values,
    /// then accept the first feasible candidate without comparing errors.
    Randomized,
}


impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exhaustive => "Exhaustive",
            Self::Randomized => "Randomized",
        };
        write!(f, "{name}")
    }
}


impl SplitStrategy {
    /// Returns the splitting rule for the samples at `indices`,
    /// or `None` if the node should stay a leaf.
    ///
    /// `indices` must be non-empty.
    pub(crate) fn find_split<R>(
        &self,
        samples: &[Sample],
        indices: &[usize],
        min_leaf_size: usize,
        parent_error: f64,
        rng: &mut R,
    ) -> Result<Option<Splitter>>
        where R: Rng + ?Sized,
    {
        match self {
            Self::Exhaustive => {
                best_split(samples, indices, min_leaf_size, parent_error)
            },
            Self::Randomized => {
                Ok(first_feasible_split(samples, indices, min_leaf_size, rng))
            },
        }
    }
}


/// Distinct values of `feature` among `indices`, sorted ascending.
fn distinct_values(samples: &[Sample], indices: &[usize], feature: usize)
    -> Vec<f64>
{
    let mut values = indices.iter()
        .map(|&i| samples[i].input[feature])
        .collect::<Vec<_>>();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();
    values
}


/// Midpoint of `a` and `b` that stays finite for large finite inputs.
#[inline(always)]
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2f64
    } else {
        a / 2f64 + b / 2f64
    }
}


/// Mean absolute error of the mean prediction over `indices`.
fn node_error(samples: &[Sample], indices: &[usize]) -> Result<f64> {
    let prediction = mean(indices.iter().map(|&i| &samples[i]))?;
    mean_absolute_error(&prediction, indices.iter().map(|&i| &samples[i]))
}


/// Returns the best splitting rule over all features.
/// Features are scored in parallel and reduced in index order,
/// so the result equals the sequential scan.
fn best_split(
    samples: &[Sample],
    indices: &[usize],
    min_leaf_size: usize,
    parent_error: f64,
) -> Result<Option<Splitter>>
{
    let n_feature = samples[indices[0]].input.len();

    let best = (0..n_feature).into_par_iter()
        .map(|feature| {
            best_split_at(samples, indices, feature, min_leaf_size)
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .fold(None, |best: Option<(f64, Splitter)>, candidate| {
            match best {
                Some((score, _)) if score <= candidate.0 => best,
                _ => Some(candidate),
            }
        });

    let splitter = best.filter(|(score, _)| *score < parent_error)
        .map(|(_, splitter)| splitter);
    Ok(splitter)
}


/// Returns the best `(score, splitter)` pair for one feature.
fn best_split_at(
    samples: &[Sample],
    indices: &[usize],
    feature: usize,
    min_leaf_size: usize,
) -> Result<Option<(f64, Splitter)>>
{
    let values = distinct_values(samples, indices, feature);
    let n_sample = indices.len() as f64;

    let mut best: Option<(f64, Splitter)> = None;
    for pair in values.windows(2) {
        let splitter = Splitter::new(feature, midpoint(pair[0], pair[1]));
        let (lindices, rindices) = splitter.partition(samples, indices.to_vec());
        if !is_feasible(lindices.len(), rindices.len(), min_leaf_size) {
            continue;
        }

        let lerror = node_error(samples, &lindices)?;
        let rerror = node_error(samples, &rindices)?;
        let score = (lindices.len() as f64 / n_sample) * lerror
            + (rindices.len() as f64 / n_sample) * rerror;

        if best.map_or(true, |(best_score, _)| score < best_score) {
            best = Some((score, splitter));
        }
    }

    Ok(best)
}


/// Walk the candidates in a random order and return the first feasible one.
fn first_feasible_split<R>(
    samples: &[Sample],
    indices: &[usize],
    min_leaf_size: usize,
    rng: &mut R,
) -> Option<Splitter>
    where R: Rng + ?Sized,
{
    let n_feature = samples[indices[0]].input.len();

    let mut features = (0..n_feature).collect::<Vec<_>>();
    features.shuffle(rng);

    for feature in features {
        let values = distinct_values(samples, indices, feature);

        // Each non-minimal distinct value stands for the midpoint
        // between itself and its predecessor.
        let mut order = (1..values.len()).collect::<Vec<_>>();
        order.shuffle(rng);

        for k in order {
            let threshold = midpoint(values[k - 1], values[k]);
            let splitter = Splitter::new(feature, threshold);
            let (n_left, n_right) = splitter.counts(samples, indices);
            if is_feasible(n_left, n_right, min_leaf_size) {
                return Some(splitter);
            }
        }
    }

    None
}


/// Both sides non-empty and at least `min_leaf_size` large.
#[inline(always)]
fn is_feasible(n_left: usize, n_right: usize, min_leaf_size: usize) -> bool {
    n_left > 0 && n_right > 0
        && n_left >= min_leaf_size && n_right >= min_leaf_size
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> Vec<Sample> {
        points.iter()
            .map(|&(x, y)| Sample::new(vec![x], vec![y]))
            .collect()
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let samples = line(&[(3.0, 0.0), (1.0, 0.0), (3.0, 0.0), (2.0, 0.0)]);
        let indices = [0, 1, 2, 3];
        assert_eq!(distinct_values(&samples, &indices, 0), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn exhaustive_picks_midpoint() {
        let samples = line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 10.0), (3.0, 10.0)]);
        let indices = [0, 1, 2, 3];
        let splitter = best_split(&samples, &indices, 1, 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(splitter, Splitter::new(0, 1.5));
    }

    #[test]
    fn midpoint_of_huge_values_is_finite() {
        assert_eq!(midpoint(1.0, 2.0), 1.5);
        assert_eq!(midpoint(f64::MAX, f64::MAX), f64::MAX);

        let samples = line(&[(1.0e308, 0.0), (1.5e308, 10.0)]);
        let indices = [0, 1];
        let splitter = best_split(&samples, &indices, 1, 5.0)
            .unwrap()
            .unwrap();
        assert!((splitter.threshold / 1.25e308 - 1.0).abs() < 1e-12);

        let mut rng = StdRng::seed_from_u64(0);
        let splitter = first_feasible_split(&samples, &indices, 1, &mut rng)
            .unwrap();
        assert!(splitter.threshold.is_finite());
    }

    #[test]
    fn exhaustive_requires_strict_improvement() {
        let samples = line(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
        let indices = [0, 1, 2];
        assert!(best_split(&samples, &indices, 1, 0.0).unwrap().is_none());
    }

    #[test]
    fn ties_go_to_the_first_feature() {
        // Both features separate the targets perfectly.
        let samples = vec![
            Sample::new(vec![0.0, 5.0], vec![0.0]),
            Sample::new(vec![1.0, 6.0], vec![10.0]),
        ];
        let indices = [0, 1];
        let splitter = best_split(&samples, &indices, 1, 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(splitter.feature, 0);
    }

    #[test]
    fn randomized_respects_leaf_size() {
        let samples = line(&[
            (0.0, 0.0), (1.0, 3.0), (2.0, 1.0), (3.0, 7.0), (4.0, 2.0),
        ]);
        let indices = [0, 1, 2, 3, 4];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let splitter = first_feasible_split(&samples, &indices, 2, &mut rng)
                .unwrap();
            let (n_left, n_right) = splitter.counts(&samples, &indices);
            assert!(n_left >= 2 && n_right >= 2);
        }
        assert!(first_feasible_split(&samples, &indices, 3, &mut rng).is_none());
    }
}
