//! A node struct used in the regression tree.
use serde::{Serialize, Deserialize};

use crate::{Sample, Result};
use crate::common::utils::mean_absolute_error;
use super::split_rule::*;

use std::fmt;
use std::mem;


/// A node of a regression tree.
///
/// Both variants keep the mean output of the training samples
/// that reached the node (`prediction`) and its mean absolute error
/// (`error`). A branch keeps them so that pruning can turn it back
/// into a leaf.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch {
        /// Splitting rule
        splitter: Splitter,
        /// Child for `input[feature] < threshold`.
        left: Box<Node>,
        /// Child for `input[feature] >= threshold`.
        right: Box<Node>,
        /// Prediction of this node as a leaf.
        prediction: Vec<f64>,
        /// Training error of this node as a leaf.
        error: f64,
    },
    /// A node that have no child.
    Leaf {
        /// Mean output of the samples reached this leaf.
        prediction: Vec<f64>,
        /// Training error of `prediction`.
        error: f64,
    },
}


impl Node {
    /// Construct a branch node from the arguments.
    #[inline]
    pub(crate) fn branch(
        splitter: Splitter,
        left: Box<Node>,
        right: Box<Node>,
        prediction: Vec<f64>,
        error: f64,
    ) -> Self
    {
        Self::Branch { splitter, left, right, prediction, error, }
    }


    /// Construct a leaf node from the given arguments.
    #[inline]
    pub(crate) fn leaf(prediction: Vec<f64>, error: f64) -> Self {
        Self::Leaf { prediction, error, }
    }


    /// Returns `true` if `self` has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Prediction of this node as a leaf.
    #[inline]
    pub fn prediction(&self) -> &[f64] {
        match self {
            Self::Branch { prediction, .. }
            | Self::Leaf { prediction, .. } => &prediction[..],
        }
    }


    /// Training error of this node as a leaf.
    #[inline]
    pub fn error(&self) -> f64 {
        match self {
            Self::Branch { error, .. } | Self::Leaf { error, .. } => *error,
        }
    }


    /// Returns the splitting rule if `self` is a branch.
    #[inline]
    pub fn splitter(&self) -> Option<&Splitter> {
        match self {
            Self::Branch { splitter, .. } => Some(splitter),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the children `(left, right)` if `self` is a branch.
    #[inline]
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Self::Branch { left, right, .. } => Some((&**left, &**right)),
            Self::Leaf { .. } => None,
        }
    }


    /// Descend from `self` to a leaf and return its prediction.
    pub(crate) fn predict(&self, input: &[f64]) -> &[f64] {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                match splitter.split(input) {
                    LeftRight::Left  => left.predict(input),
                    LeftRight::Right => right.predict(input),
                }
            },
            Self::Leaf { prediction, .. } => &prediction[..],
        }
    }


    /// Position of the leaf reached by `input`
    /// in left-to-right order, counted from `offset`.
    pub(crate) fn leaf_index(&self, input: &[f64], offset: usize) -> usize {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                match splitter.split(input) {
                    LeftRight::Left  => left.leaf_index(input, offset),
                    LeftRight::Right => {
                        right.leaf_index(input, offset + left.leaves())
                    },
                }
            },
            Self::Leaf { .. } => offset,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => left.leaves() + right.leaves(),
            Self::Leaf { .. } => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0_usize,
        }
    }


    /// Drop the split and the children, keeping the leaf values.
    #[inline]
    fn collapse(&mut self) {
        if let Self::Branch { prediction, error, .. } = self {
            *self = Self::Leaf {
                prediction: mem::take(prediction),
                error: *error,
            };
        }
    }


    /// Prune this sub-tree bottom-up against `validation`.
    ///
    /// Returns the validation error of this node as a leaf.
    /// A branch collapses to a leaf when one side of its split
    /// receives no validation sample, or when the size-weighted
    /// leaf errors of its children are not strictly smaller than
    /// its own leaf error.
    ///
    /// `validation` must be non-empty.
    pub(crate) fn prune(&mut self, validation: &[&Sample]) -> Result<f64> {
        let leaf_error = mean_absolute_error(
            self.prediction(), validation.iter().copied()
        )?;

        let keep = match self {
            Self::Leaf { .. } => return Ok(leaf_error),
            Self::Branch { splitter, left, right, .. } => {
                let (lsamples, rsamples) = validation.iter()
                    .copied()
                    .partition::<Vec<&Sample>, _>(|sample| {
                        splitter.split(&sample.input) == LeftRight::Left
                    });

                if lsamples.is_empty() || rsamples.is_empty() {
                    false
                } else {
                    let lerror = left.prune(&lsamples[..])?;
                    let rerror = right.prune(&rsamples[..])?;

                    let n_sample = validation.len() as f64;
                    let joint_error =
                        (lsamples.len() as f64 / n_sample) * lerror
                        + (rsamples.len() as f64 / n_sample) * rerror;

                    joint_error < leaf_error
                }
            },
        };

        if !keep {
            self.collapse();
        }

        Ok(leaf_error)
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                let splitter = format!(
                    "\tnode_{id} [ label = \"x[{feat}] < {thr:.2} ?\" ];\n",
                    feat = splitter.feature,
                    thr  = splitter.threshold,
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(splitter);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Self::Leaf { prediction, .. } => {
                let values = prediction.iter()
                    .map(|p| format!("{p:.2}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let info = format!(
                    "\tnode_{id} [ label = \"[{values}]\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { splitter, left, right, prediction, error, } => {
                f.debug_struct("Branch")
                    .field("splitter", &splitter)
                    .field("prediction", &prediction)
                    .field("error", &error)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { prediction, error, } => {
                f.debug_struct("Leaf")
                    .field("prediction", &prediction)
                    .field("error", &error)
                    .finish()
            },
        }
    }
}
