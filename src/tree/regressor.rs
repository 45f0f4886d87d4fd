use serde::{Serialize, Deserialize};

use crate::{Sample, Regressor, Result, TreeError};
use crate::common::checker;
use super::node::Node;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// A grown regression tree.
/// This struct is a wrapper of the root `Node`
/// that also remembers the input/output lengths it was built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    root: Box<Node>,
    n_feature: usize,
    n_output: usize,
}


impl Tree {
    #[inline]
    pub(crate) fn from_components(
        root: Box<Node>,
        n_feature: usize,
        n_output: usize,
    ) -> Self
    {
        Self { root, n_feature, n_output, }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the input length this tree was built for.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_feature
    }


    /// Returns the length of the prediction vectors.
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.n_output
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth. A single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the prediction of the leaf reached by `input`
    /// without copying it.
    ///
    /// # Panics
    /// Panics if `input` is shorter than [`Tree::n_features`].
    #[inline]
    pub fn predict_ref(&self, input: &[f64]) -> &[f64] {
        assert!(
            input.len() >= self.n_feature,
            "input has {} values, but the tree uses {} features",
            input.len(),
            self.n_feature,
        );
        self.root.predict(input)
    }


    /// Returns the position of the leaf reached by `input`,
    /// counted from the left. The value lies in `0..self.leaves()`.
    ///
    /// # Panics
    /// Panics if `input` is shorter than [`Tree::n_features`].
    pub fn leaf_index(&self, input: &[f64]) -> usize {
        assert!(
            input.len() >= self.n_feature,
            "input has {} values, but the tree uses {} features",
            input.len(),
            self.n_feature,
        );
        self.root.leaf_index(input, 0)
    }


    /// Prune this tree against `validation`,
    /// which must be disjoint from the training samples.
    ///
    /// Splits whose children do not strictly reduce the validation error
    /// of their parent's constant prediction are removed, bottom-up.
    /// Returns the validation error of the root as a leaf.
    pub fn prune(&mut self, validation: &[Sample]) -> Result<f64> {
        let (n_feature, n_output) = checker::check_samples(validation)?;
        if n_feature != self.n_feature {
            return Err(TreeError::InputLength {
                index: 0, expected: self.n_feature, found: n_feature,
            });
        }
        if n_output != self.n_output {
            return Err(TreeError::OutputLength {
                index: 0, expected: self.n_output, found: n_output,
            });
        }

        let validation = validation.iter().collect::<Vec<_>>();
        self.root.prune(&validation[..])
    }


    /// Write the current regression tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph RegressionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Regressor for Tree {
    fn predict(&self, input: &[f64]) -> Vec<f64> {
        self.predict_ref(input).to_vec()
    }
}
