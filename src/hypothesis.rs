//! The core library for `Hypothesis` traits.

pub(crate) mod hypothesis_traits;
pub(crate) mod boosted_regressor;


pub use hypothesis_traits::Regressor;
pub use boosted_regressor::BoostedRegressor;
