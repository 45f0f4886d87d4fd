use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Sample, Result, TreeError};
use crate::common::checker;


/// A named pair of training and test samples.
///
/// `Dataset::new` checks that both sets are non-empty
/// and that every sample shares the same input/output lengths,
/// so the rest of the crate can rely on a consistent shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    train: Vec<Sample>,
    test: Vec<Sample>,
    input_len: usize,
    output_len: usize,
}


impl Dataset {
    /// Construct a new instance of `Dataset`.
    pub fn new<S>(name: S, train: Vec<Sample>, test: Vec<Sample>)
        -> Result<Self>
        where S: Into<String>,
    {
        let (input_len, output_len) = checker::check_samples(&train)?;
        let test_shape = checker::check_samples(&test)?;

        if test_shape.0 != input_len {
            return Err(TreeError::InputLength {
                index: 0, expected: input_len, found: test_shape.0,
            });
        }
        if test_shape.1 != output_len {
            return Err(TreeError::OutputLength {
                index: 0, expected: output_len, found: test_shape.1,
            });
        }

        let name = name.into();
        Ok(Self { name, train, test, input_len, output_len, })
    }


    /// Returns the name of this dataset.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the training samples.
    pub fn train(&self) -> &[Sample] {
        &self.train[..]
    }


    /// Returns the test samples.
    pub fn test(&self) -> &[Sample] {
        &self.test[..]
    }


    /// Returns the length of every input vector.
    pub fn input_len(&self) -> usize {
        self.input_len
    }


    /// Returns the length of every output vector.
    pub fn output_len(&self) -> usize {
        self.output_len
    }


    /// Index of the largest output component for each training sample.
    pub fn train_argmax(&self) -> Vec<usize> {
        self.train.iter()
            .map(|sample| crate::argmax(sample.output()))
            .collect()
    }


    /// Index of the largest output component for each test sample.
    pub fn test_argmax(&self) -> Vec<usize> {
        self.test.iter()
            .map(|sample| crate::argmax(sample.output()))
            .collect()
    }
}


/// Shuffle `samples` with a seeded RNG and cut them into
/// a training part and a validation part.
/// The validation part holds `floor(n * validation_ratio)` samples.
///
/// Both parts must be non-empty,
/// otherwise this function returns an error.
/// Use the validation part to [`prune`](crate::Tree::prune) trees
/// grown on the training part.
pub fn train_validation_split(
    samples: &[Sample],
    validation_ratio: f64,
    seed: u64,
) -> Result<(Vec<Sample>, Vec<Sample>)>
{
    checker::check_samples(samples)?;
    checker::check_fraction("validation ratio", validation_ratio)?;

    let n_sample = samples.len();
    let n_valid = (n_sample as f64 * validation_ratio) as usize;
    if n_valid == 0 || n_valid == n_sample {
        return Err(TreeError::InvalidParameter(format!(
            "validation ratio {validation_ratio} leaves an empty part \
             of a {n_sample}-sample set"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut ix = (0..n_sample).collect::<Vec<_>>();
    ix.shuffle(&mut rng);

    let validation = ix[..n_valid].iter()
        .map(|&i| samples[i].clone())
        .collect::<Vec<_>>();
    let train = ix[n_valid..].iter()
        .map(|&i| samples[i].clone())
        .collect::<Vec<_>>();

    Ok((train, validation))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn samples(n: usize) -> Vec<Sample> {
        (0..n).map(|i| Sample::new(vec![i as f64], vec![i as f64]))
            .collect()
    }

    #[test]
    fn split_sizes_and_disjointness() {
        let all = samples(10);
        let (train, valid) = train_validation_split(&all, 0.3, 7).unwrap();
        assert_eq!(train.len(), 7);
        assert_eq!(valid.len(), 3);

        let mut seen = train.iter()
            .chain(&valid)
            .map(|s| s.input()[0] as usize)
            .collect::<Vec<_>>();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn split_is_reproducible() {
        let all = samples(20);
        let a = train_validation_split(&all, 0.5, 42).unwrap();
        let b = train_validation_split(&all, 0.5, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn split_rejects_empty_parts() {
        let all = samples(3);
        assert!(train_validation_split(&all, 0.1, 0).is_err());
        assert!(train_validation_split(&all, 1.0, 0).is_err());
    }

    #[test]
    fn dataset_rejects_mismatched_test_set() {
        let train = samples(4);
        let test = vec![Sample::new(vec![0.0, 1.0], vec![0.0])];
        let dataset = Dataset::new("toy", train, test);
        assert!(matches!(dataset, Err(TreeError::InputLength { .. })));
    }
}
