//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{Sample, Result, TreeError};


/// Check whether the sample set is valid or not.
/// Returns the pair `(input length, output length)` shared
/// by every sample.
pub(crate) fn check_samples(samples: &[Sample]) -> Result<(usize, usize)> {
    let first = samples.first().ok_or(TreeError::EmptySample)?;
    let (input_len, output_len) = first.shape();

    for (index, sample) in samples.iter().enumerate() {
        let (n_in, n_out) = sample.shape();
        if n_in == 0 {
            return Err(TreeError::EmptyVector { index, field: "input" });
        }
        if n_out == 0 {
            return Err(TreeError::EmptyVector { index, field: "output" });
        }
        if n_in != input_len {
            return Err(TreeError::InputLength {
                index, expected: input_len, found: n_in,
            });
        }
        if n_out != output_len {
            return Err(TreeError::OutputLength {
                index, expected: output_len, found: n_out,
            });
        }
    }

    Ok((input_len, output_len))
}


/// Check that `value` lies in `(0, 1]`.
pub(crate) fn check_fraction(name: &str, value: f64) -> Result<()> {
    if value > 0f64 && value <= 1f64 {
        Ok(())
    } else {
        Err(TreeError::InvalidParameter(
            format!("{name} must be in (0, 1], got {value}")
        ))
    }
}


/// Check the learning rate.
/// The rate must be a finite positive number.
pub(crate) fn check_learning_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0f64 {
        Ok(())
    } else {
        Err(TreeError::InvalidParameter(
            format!("learning rate must be positive and finite, got {rate}")
        ))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_samples_pass() {
        let samples = vec![
            Sample::new(vec![1.0, 2.0], vec![0.0]),
            Sample::new(vec![3.0, 4.0], vec![1.0]),
        ];
        assert_eq!(check_samples(&samples).unwrap(), (2, 1));
    }

    #[test]
    fn mismatched_samples_fail() {
        let samples = vec![
            Sample::new(vec![1.0, 2.0], vec![0.0]),
            Sample::new(vec![3.0], vec![1.0]),
        ];
        let err = check_samples(&samples).unwrap_err();
        assert!(matches!(err, TreeError::InputLength { index: 1, .. }));

        let samples = vec![
            Sample::new(vec![1.0], vec![0.0]),
            Sample::new(vec![3.0], vec![1.0, 2.0]),
        ];
        let err = check_samples(&samples).unwrap_err();
        assert!(matches!(err, TreeError::OutputLength { index: 1, .. }));
    }

    #[test]
    fn empty_vectors_fail() {
        assert!(matches!(check_samples(&[]), Err(TreeError::EmptySample)));

        let samples = vec![Sample::new(vec![], vec![0.0])];
        assert!(matches!(
            check_samples(&samples),
            Err(TreeError::EmptyVector { field: "input", .. })
        ));
    }

    #[test]
    fn fractions() {
        assert!(check_fraction("subsample", 1.0).is_ok());
        assert!(check_fraction("subsample", 0.25).is_ok());
        assert!(check_fraction("subsample", 0.0).is_err());
        assert!(check_fraction("subsample", 1.5).is_err());
        assert!(check_fraction("subsample", f64::NAN).is_err());
        assert!(check_learning_rate(f64::INFINITY).is_err());
    }
}
