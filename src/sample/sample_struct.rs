use serde::{Serialize, Deserialize};


/// Struct `Sample` holds a fixed-length feature vector `input`
/// and a fixed-length target vector `output`.
///
/// A `Sample` is never modified after construction.
/// Boosting builds new samples that share the input
/// but carry a residual output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub(crate) input: Vec<f64>,
    pub(crate) output: Vec<f64>,
}


impl Sample {
    /// Construct a new instance of `Sample`.
    #[inline]
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Self {
        Self { input, output }
    }


    /// Returns the feature vector.
    #[inline]
    pub fn input(&self) -> &[f64] {
        &self.input[..]
    }


    /// Returns the target vector.
    #[inline]
    pub fn output(&self) -> &[f64] {
        &self.output[..]
    }


    /// Returns the pair `(input length, output length)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.input.len(), self.output.len())
    }


    /// Returns a new sample with the same input
    /// and `output - rate * prediction` as its output.
    #[inline]
    pub(crate) fn residual(&self, prediction: &[f64], rate: f64) -> Self {
        let output = self.output.iter()
            .zip(prediction)
            .map(|(y, p)| y - rate * p)
            .collect::<Vec<_>>();

        Self { input: self.input.clone(), output }
    }
}


impl From<(Vec<f64>, Vec<f64>)> for Sample {
    #[inline]
    fn from((input, output): (Vec<f64>, Vec<f64>)) -> Self {
        Self::new(input, output)
    }
}
