use crate::Sample;


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target vector for the given feature vector.
    fn predict(&self, input: &[f64]) -> Vec<f64>;


    /// Predicts the target vectors of every sample in `samples`.
    fn predict_all(&self, samples: &[Sample]) -> Vec<Vec<f64>> {
        samples.iter()
            .map(|sample| self.predict(sample.input()))
            .collect::<Vec<_>>()
    }
}
