use crate::estimators::approaches::discrete;
pub use crate::estimators::traits::LocalValues;
use ndarray::{Array1, Array2};
use std::hash::Hash;

/// Entropy estimation methods for discrete data
///
/// This struct provides static methods for creating entropy estimators
/// over single sequences and over column subsets of a sample matrix.
pub struct Entropy;

impl Entropy {
    /// Creates a new discrete entropy estimator for a 1D sequence, in bits
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of discrete values
    ///
    /// # Returns
    ///
    /// A discrete entropy estimator configured for the provided data,
    /// using logarithm base 2
    pub fn new_discrete<T: Hash + Eq + Clone>(data: Array1<T>) -> discrete::shannon::DiscreteEntropy<T> {
        discrete::shannon::DiscreteEntropy::new(data)
    }

    /// Creates a new discrete entropy estimator with an explicit logarithm base
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of discrete values
    /// * `base` - Logarithm base, `base > 0` and `base != 1` (caller precondition)
    pub fn new_discrete_with_base<T: Hash + Eq + Clone>(
        data: Array1<T>,
        base: f64,
    ) -> discrete::shannon::DiscreteEntropy<T> {
        discrete::shannon::DiscreteEntropy::with_base(data, base)
    }

    /// Creates a new joint entropy estimator over selected matrix columns, in bits
    ///
    /// # Arguments
    ///
    /// * `data` - Sample matrix of shape (samples, variables)
    /// * `columns` - Zero-based column indices forming the joint variable;
    ///   every index must be less than the matrix width (caller precondition)
    ///
    /// # Returns
    ///
    /// A joint entropy estimator over the composite variable formed by the
    /// selected columns, using logarithm base 2
    pub fn new_discrete_joint<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns: &[usize],
    ) -> discrete::joint::DiscreteJointEntropy {
        discrete::joint::DiscreteJointEntropy::new(data, columns)
    }

    /// Creates a new joint entropy estimator with an explicit logarithm base
    pub fn new_discrete_joint_with_base<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns: &[usize],
        base: f64,
    ) -> discrete::joint::DiscreteJointEntropy {
        discrete::joint::DiscreteJointEntropy::with_base(data, columns, base)
    }
}
