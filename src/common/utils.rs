//! This file provides some common functions
//! such as the mean prediction and its absolute error.
use crate::{Sample, Result, TreeError};


/// Returns the elementwise average of `output` over `samples`.
///
/// An empty sample set has no mean;
/// this function returns [`TreeError::EmptySample`] for it
/// instead of a vector of zeros.
pub fn mean<'a, I>(samples: I) -> Result<Vec<f64>>
    where I: IntoIterator<Item = &'a Sample>,
{
    let mut samples = samples.into_iter();
    let first = samples.next().ok_or(TreeError::EmptySample)?;

    let mut sum = first.output.clone();
    let mut n_sample = 1_usize;
    for sample in samples {
        if sample.output.len() != sum.len() {
            return Err(TreeError::OutputLength {
                index: n_sample,
                expected: sum.len(),
                found: sample.output.len(),
            });
        }
        sum.iter_mut()
            .zip(&sample.output)
            .for_each(|(s, y)| { *s += y; });
        n_sample += 1;
    }

    let n_sample = n_sample as f64;
    sum.iter_mut().for_each(|s| { *s /= n_sample; });
    Ok(sum)
}


/// Returns the mean absolute error of the constant `prediction`
/// against `samples`:
///
/// ```text
/// mean over samples ( sum over outputs | prediction[i] - output[i] | )
/// ```
///
/// The same value serves as the impurity of a node
/// and as the validation error used for pruning.
pub fn mean_absolute_error<'a, I>(prediction: &[f64], samples: I)
    -> Result<f64>
    where I: IntoIterator<Item = &'a Sample>,
{
    let mut total = 0f64;
    let mut n_sample = 0_usize;
    for sample in samples {
        if sample.output.len() != prediction.len() {
            return Err(TreeError::PredictionLength {
                expected: sample.output.len(),
                found: prediction.len(),
            });
        }
        total += absolute_error(prediction, &sample.output);
        n_sample += 1;
    }

    if n_sample == 0 {
        return Err(TreeError::EmptySample);
    }

    Ok(total / n_sample as f64)
}


/// Sum of componentwise absolute differences.
#[inline(always)]
pub(crate) fn absolute_error(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .sum::<f64>()
}


/// Returns the index of the largest value.
/// Ties go to the smallest index; an empty slice returns `0`.
pub fn argmax(values: &[f64]) -> usize {
    let mut argmax = 0_usize;
    let mut max = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if i == 0 || v > max {
            argmax = i;
            max = v;
        }
    }
    argmax
}


/// Returns the fraction of `samples` whose output argmax differs from
/// the argmax of `prediction`.
/// This is the classification error of a constant prediction
/// for one-hot encoded targets.
pub fn argmax_error<'a, I>(prediction: &[f64], samples: I) -> Result<f64>
    where I: IntoIterator<Item = &'a Sample>,
{
    let predicted = argmax(prediction);

    let mut n_miss = 0_usize;
    let mut n_sample = 0_usize;
    for sample in samples {
        if argmax(&sample.output) != predicted {
            n_miss += 1;
        }
        n_sample += 1;
    }

    if n_sample == 0 {
        return Err(TreeError::EmptySample);
    }

    Ok(n_miss as f64 / n_sample as f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_outputs() {
        let samples = vec![
            Sample::new(vec![0.0], vec![1.0, 4.0]),
            Sample::new(vec![1.0], vec![3.0, 8.0]),
        ];
        assert_eq!(mean(&samples).unwrap(), vec![2.0, 6.0]);
    }

    #[test]
    fn mean_of_nothing_is_an_error() {
        let samples: Vec<Sample> = Vec::new();
        assert!(matches!(mean(&samples), Err(TreeError::EmptySample)));
        assert!(matches!(
            mean_absolute_error(&[0.0], &samples),
            Err(TreeError::EmptySample)
        ));
    }

    #[test]
    fn absolute_error_sums_over_outputs() {
        let samples = vec![
            Sample::new(vec![0.0], vec![1.0, 1.0]),
            Sample::new(vec![0.0], vec![3.0, -1.0]),
        ];
        // (|2-1| + |0-1|) and (|2-3| + |0+1|) -> mean of 2 and 2
        let mae = mean_absolute_error(&[2.0, 0.0], &samples).unwrap();
        assert_eq!(mae, 2.0);
    }

    #[test]
    fn prediction_length_is_checked() {
        let samples = vec![Sample::new(vec![0.0], vec![1.0, 1.0])];
        assert!(matches!(
            mean_absolute_error(&[2.0], &samples),
            Err(TreeError::PredictionLength { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn argmax_and_error() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[1.0, 1.0]), 0);
        assert_eq!(argmax(&[-3.0, -1.0]), 1);

        let samples = vec![
            Sample::new(vec![0.0], vec![1.0, 0.0]),
            Sample::new(vec![0.0], vec![0.0, 1.0]),
            Sample::new(vec![0.0], vec![0.0, 1.0]),
            Sample::new(vec![0.0], vec![0.0, 1.0]),
        ];
        assert_eq!(argmax_error(&[0.2, 0.8], &samples).unwrap(), 0.25);
    }
}
