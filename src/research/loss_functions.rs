use crate::{Sample, Regressor};
use crate::common::utils::{absolute_error, argmax};


/// Mean absolute error of `f` over `samples`,
/// summed over the output components.
/// Returns `0` for an empty sample set.
pub fn absolute_loss<H>(samples: &[Sample], f: &H) -> f64
    where H: Regressor,
{
    if samples.is_empty() {
        return 0f64;
    }

    let n_sample = samples.len() as f64;
    samples.iter()
        .map(|sample| absolute_error(&f.predict(sample.input()), sample.output()))
        .sum::<f64>()
        / n_sample
}


/// Fraction of `samples` whose output argmax differs from
/// the argmax of the prediction of `f`.
/// Returns `0` for an empty sample set.
pub fn argmax_loss<H>(samples: &[Sample], f: &H) -> f64
    where H: Regressor,
{
    if samples.is_empty() {
        return 0f64;
    }

    let n_sample = samples.len() as f64;
    samples.iter()
        .filter(|sample| {
            argmax(&f.predict(sample.input())) != argmax(sample.output())
        })
        .count() as f64
        / n_sample
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(Vec<f64>);

    impl Regressor for Constant {
        fn predict(&self, _input: &[f64]) -> Vec<f64> {
            self.0.clone()
        }
    }

    #[test]
    fn losses_of_a_constant() {
        let samples = vec![
            Sample::new(vec![0.0], vec![1.0, 0.0]),
            Sample::new(vec![1.0], vec![0.0, 1.0]),
        ];
        let f = Constant(vec![0.75, 0.25]);

        assert_eq!(absolute_loss(&samples, &f), 1.0);
        assert_eq!(argmax_loss(&samples, &f), 0.5);
        assert_eq!(argmax_loss(&[], &f), 0.0);
    }
}
