//! Binary regression trees.
//!
//! A tree is grown by [`TreeBuilder`] with one of the
//! [`SplitStrategy`] variants and can be pruned afterwards
//! with a held-out validation set.

/// Defines the splitting rule of a branch node.
pub mod split_rule;

/// Defines the node type.
pub mod node;

/// Defines the exhaustive and randomized split search.
pub mod strategy;

/// Tree builder.
pub mod builder;

/// Defines the grown tree.
pub mod regressor;


pub use split_rule::{Splitter, LeftRight};
pub use node::Node;
pub use strategy::SplitStrategy;
pub use builder::TreeBuilder;
pub use regressor::Tree;
