// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

pub mod discrete_utils;
pub mod joint;
pub mod shannon;

use crate::estimators::approaches::discrete::discrete_utils::column_union;
use crate::estimators::approaches::discrete::joint::DiscreteJointEntropy;
use crate::estimators::traits::{GlobalValue, LocalValues};
use ndarray::{Array1, Array2};
use std::hash::Hash;

/// Discrete Mutual Information estimator using the entropy-summation formula.
///
/// I(X; Y) = H(X) + H(Y) - H(X, Y), where X and Y are the joint variables
/// over two column sets of a sample matrix and H(X, Y) is the joint entropy
/// over the union of both sets. Symmetric in its two column sets. A
/// zero-row matrix makes every sub-entropy NaN, and the NaN propagates
/// through the sum; it is never coerced to zero.
pub struct DiscreteMutualInformation {
    h_first: DiscreteJointEntropy,
    h_second: DiscreteJointEntropy,
    h_joint: DiscreteJointEntropy,
}

impl DiscreteMutualInformation {
    /// Mutual information in bits (base 2).
    pub fn new<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns1: &[usize],
        columns2: &[usize],
    ) -> Self {
        Self::with_base(data, columns1, columns2, 2.0)
    }

    /// Mutual information in an arbitrary base.
    pub fn with_base<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns1: &[usize],
        columns2: &[usize],
        base: f64,
    ) -> Self {
        let union = column_union(columns1, columns2);
        Self {
            h_first: DiscreteJointEntropy::with_base(data, columns1, base),
            h_second: DiscreteJointEntropy::with_base(data, columns2, base),
            h_joint: DiscreteJointEntropy::with_base(data, &union, base),
        }
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> f64 {
        // I(X; Y) = H(X) + H(Y) - H(X,Y)
        self.h_first.global_value() + self.h_second.global_value() - self.h_joint.global_value()
    }
}

impl LocalValues for DiscreteMutualInformation {
    /// i(x,y) = h(x) + h(y) - h(x,y), per row.
    fn local_values(&self) -> Array1<f64> {
        let mut res = self.h_first.local_values();
        res += &self.h_second.local_values();
        res -= &self.h_joint.local_values();
        res
    }
}

/// Discrete Conditional Entropy estimator using the entropy-difference formula.
///
/// H(X | Y) = H(X, Y) - H(Y), where the joint term runs over the union of
/// the target and conditioning column sets. NaN from a zero-row matrix
/// propagates through the difference.
pub struct DiscreteConditionalEntropy {
    h_union: DiscreteJointEntropy,
    h_cond: DiscreteJointEntropy,
}

impl DiscreteConditionalEntropy {
    /// Conditional entropy in bits (base 2).
    pub fn new<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        target_columns: &[usize],
        conditional_columns: &[usize],
    ) -> Self {
        Self::with_base(data, target_columns, conditional_columns, 2.0)
    }

    /// Conditional entropy in an arbitrary base.
    pub fn with_base<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        target_columns: &[usize],
        conditional_columns: &[usize],
        base: f64,
    ) -> Self {
        let union = column_union(target_columns, conditional_columns);
        Self {
            h_union: DiscreteJointEntropy::with_base(data, &union, base),
            h_cond: DiscreteJointEntropy::with_base(data, conditional_columns, base),
        }
    }
}

impl GlobalValue for DiscreteConditionalEntropy {
    fn global_value(&self) -> f64 {
        // H(X|Y) = H(X,Y) - H(Y)
        self.h_union.global_value() - self.h_cond.global_value()
    }
}

impl LocalValues for DiscreteConditionalEntropy {
    /// h(x|y) = h(x,y) - h(y), per row.
    fn local_values(&self) -> Array1<f64> {
        let mut res = self.h_union.local_values();
        res -= &self.h_cond.local_values();
        res
    }
}
