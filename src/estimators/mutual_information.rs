use crate::estimators::approaches::discrete::DiscreteMutualInformation;
use ndarray::Array2;
use std::hash::Hash;

/// Mutual information estimation methods for discrete data
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a new discrete mutual information estimator, in bits
    ///
    /// Computes I(X; Y) = H(X) + H(Y) - H(X, Y) where X and Y are the joint
    /// variables over `columns1` and `columns2` and the joint term runs over
    /// the deduplicated union of both column sets.
    ///
    /// # Arguments
    ///
    /// * `data` - Sample matrix of shape (samples, variables)
    /// * `columns1` - Zero-based column indices of the first variable set
    /// * `columns2` - Zero-based column indices of the second variable set
    pub fn new_discrete<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns1: &[usize],
        columns2: &[usize],
    ) -> DiscreteMutualInformation {
        DiscreteMutualInformation::new(data, columns1, columns2)
    }

    /// Creates a new discrete mutual information estimator with an explicit
    /// logarithm base
    pub fn new_discrete_with_base<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns1: &[usize],
        columns2: &[usize],
        base: f64,
    ) -> DiscreteMutualInformation {
        DiscreteMutualInformation::with_base(data, columns1, columns2, base)
    }
}
