use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;
use crate::estimators::traits::{GlobalValue, LocalValues};
use ndarray::Array1;
use std::hash::Hash;

/// Plug-in Shannon entropy estimator for discrete data.
///
/// Computes H = -Σ p_i log_b p_i from empirical probabilities p_i = n_i/N,
/// summing over observed symbols only, so every term has p_i > 0 and no
/// log(0) arises. The logarithm base b rescales the natural-log entropy by
/// 1/ln(b); base 2 yields bits, base e nats.
///
/// The entropy of an empty sample is undefined and returned as NaN, not 0.
/// Local values are supported via LocalValues, where each sample
/// contributes its surprisal -log_b p(x).
pub struct DiscreteEntropy<T: Hash + Eq + Clone> {
    dataset: DiscreteDataset<T>,
    base: f64,
}

impl<T: Hash + Eq + Clone> DiscreteEntropy<T> {
    /// Entropy in bits (base 2).
    pub fn new(data: Array1<T>) -> Self {
        Self::with_base(data, 2.0)
    }

    /// Entropy in an arbitrary base. The base must be positive and not 1;
    /// this is a caller precondition, not re-validated here.
    pub fn with_base(data: Array1<T>, base: f64) -> Self {
        let dataset = DiscreteDataset::from_data(data);
        Self { dataset, base }
    }

    /// Number of observations.
    pub fn n(&self) -> usize {
        self.dataset.n
    }

    /// Number of distinct observed symbols.
    pub fn k(&self) -> usize {
        self.dataset.k
    }
}

impl<T: Hash + Eq + Clone> GlobalValue for DiscreteEntropy<T> {
    /// Calculate global entropy for the data set.
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        if self.dataset.n == 0 {
            return f64::NAN;
        }
        let n_f = self.dataset.n as f64;
        // -sum(p * ln p). Order of iteration doesn't matter for sum.
        let mut h = 0.0_f64;
        for &cnt in self.dataset.counts.values() {
            let p = (cnt as f64) / n_f;
            h -= p * p.ln();
        }
        h / self.base.ln()
    }
}

impl<T: Hash + Eq + Clone> LocalValues for DiscreteEntropy<T> {
    /// Calculate local entropy values for each element in the dataset.
    fn local_values(&self) -> Array1<f64> {
        // Map each value to its probability: local = -log_b p(x)
        let ln_base = self.base.ln();
        let p_local = self.dataset.map_probs();
        p_local.mapv(|p| -p.ln() / ln_base)
    }
}
