//! Exports the standard types, traits, and functions.
//!
pub use crate::sample::{
    Sample,
    Dataset,
    train_validation_split,
};


pub use crate::common::utils::{
    mean,
    mean_absolute_error,
    argmax,
    argmax_error,
};


pub use crate::hypothesis::{
    Regressor,
    BoostedRegressor,
};


pub use crate::tree::{
    Node,
    Splitter,
    LeftRight,
    SplitStrategy,
    Tree,
    TreeBuilder,
};


pub use crate::booster::{
    // Booster trait
    Booster,

    BoostConfig,
    ResidualTrees,
};


pub use crate::research::{
    Logger,
    SweepResult,
    sweep,
    load_configs,
    absolute_loss,
    argmax_loss,
};


pub use crate::error::TreeError;
