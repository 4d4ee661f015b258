use crate::estimators::approaches::discrete::discrete_utils::reduce_columns_compact;
use crate::estimators::approaches::discrete::shannon::DiscreteEntropy;
use crate::estimators::traits::{GlobalValue, LocalValues};
use ndarray::{Array1, Array2};
use std::hash::Hash;

/// Plug-in joint entropy estimator over a column subset of a sample matrix.
///
/// One composite key is built per row from exactly the given columns, by
/// structural tuple equality, and the induced single-variable distribution
/// is fed to [`DiscreteEntropy`]. The order of `columns` affects key
/// construction but not the entropy value, which depends only on the
/// induced partition of rows. Single-column entropy is the one-element-list
/// special case; an empty column list collapses all rows onto one key
/// (entropy 0 for any non-empty matrix).
///
/// Column indices are assumed valid for the matrix width (caller
/// precondition). A zero-row matrix yields NaN.
pub struct DiscreteJointEntropy {
    inner: DiscreteEntropy<i32>,
}

impl DiscreteJointEntropy {
    /// Joint entropy in bits (base 2).
    pub fn new<T: Hash + Eq + Clone>(data: &Array2<T>, columns: &[usize]) -> Self {
        Self::with_base(data, columns, 2.0)
    }

    /// Joint entropy in an arbitrary base.
    pub fn with_base<T: Hash + Eq + Clone>(
        data: &Array2<T>,
        columns: &[usize],
        base: f64,
    ) -> Self {
        let codes = reduce_columns_compact(data, columns);
        Self {
            inner: DiscreteEntropy::with_base(codes, base),
        }
    }
}

impl GlobalValue for DiscreteJointEntropy {
    fn global_value(&self) -> f64 {
        self.inner.global_value()
    }
}

impl LocalValues for DiscreteJointEntropy {
    /// Per-row surprisal -log_b p(key), aligned with the matrix rows.
    fn local_values(&self) -> Array1<f64> {
        self.inner.local_values()
    }
}
