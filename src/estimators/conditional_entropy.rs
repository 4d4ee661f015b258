use crate::estimators::approaches::discrete::DiscreteConditionalEntropy;
use ndarray::Array2;
use std::hash::Hash;

/// Conditional entropy estimation methods for discrete data
pub struct ConditionalEntropy;

impl ConditionalEntropy {
    /// Creates a new discrete conditional entropy estimator, in bits
    ///
    /// Computes H(X | Y) = H(X, Y) - H(Y), the residual uncertainty in the
    /// target columns given the conditioning columns. The joint term runs
    /// over the deduplicated union of both column sets.
    ///
    /// # Arguments
    ///
    /// * `data` - Sample matrix of shape (samples, variables)
    /// * `target_columns` - Zero-based column indices of the target variable X
    /// * `conditional_columns` - Zero-based column indices of the conditioning variable Y
    pub fn new_discrete<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        target_columns: &[usize],
        conditional_columns: &[usize],
    ) -> DiscreteConditionalEntropy {
        DiscreteConditionalEntropy::new(data, target_columns, conditional_columns)
    }

    /// Creates a new discrete conditional entropy estimator with an explicit
    /// logarithm base
    pub fn new_discrete_with_base<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        target_columns: &[usize],
        conditional_columns: &[usize],
        base: f64,
    ) -> DiscreteConditionalEntropy {
        DiscreteConditionalEntropy::with_base(data, target_columns, conditional_columns, base)
    }
}
