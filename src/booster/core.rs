//! Provides `Booster` trait.

use crate::Result;
use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of Boosting.
/// Here, the **standard framework** is a loop of rounds
/// where each round adds one weak hypothesis to the ensemble,
/// until the booster decides to stop.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::preprocess`] ... optional.
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster {
    /// The final hypothesis output by a boosting algorithm.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the information of boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    fn run(&mut self) -> Result<Self::Output> {
        self.preprocess();

        for iteration in 1.. {
            if self.boost(iteration)?.is_break() {
                break;
            }
        }

        Ok(self.postprocess())
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess(&mut self) {}


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` while the booster keeps going,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost(&mut self, iteration: usize) -> Result<ControlFlow<usize>>;


    /// Post-processing.
    fn postprocess(&mut self) -> Self::Output;
}
