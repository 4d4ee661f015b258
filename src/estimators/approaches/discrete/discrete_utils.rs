use ndarray::{Array1, Array2, Axis};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Shared dataset for discrete (histogram-based) estimators, generic over
/// the symbol type.
pub struct DiscreteDataset<T: Hash + Eq + Clone> {
    /// Original data (1D)
    pub data: Array1<T>,
    /// Counts per unique symbol
    pub counts: HashMap<T, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
    /// Probability dictionary p(x) for each unique symbol
    pub dist: HashMap<T, f64>,
}

impl<T: Hash + Eq + Clone> DiscreteDataset<T> {
    /// Build a DiscreteDataset from raw 1D data
    pub fn from_data(data: Array1<T>) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = counts.len();
        let n_f = n as f64;
        let mut dist = HashMap::with_capacity(k);
        for (val, cnt) in counts.iter() {
            dist.insert(val.clone(), *cnt as f64 / n_f);
        }
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Map each sample to its probability using the cached distribution dictionary
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.map(|v| self.dist[v])
    }
}

/// Count the occurrences of each value in an array.
/// The sum of all counts equals the array length.
pub fn count_frequencies<T: Hash + Eq + Clone>(data: &Array1<T>) -> HashMap<T, usize> {
    let mut frequency_map = HashMap::new();
    for value in data.iter() {
        *frequency_map.entry(value.clone()).or_insert(0) += 1;
    }
    frequency_map
}

/// Reduce the selected columns of a sample matrix into a single compact
/// joint code space.
///
/// Each row's tuple of values at `columns` (in the given order) is mapped to
/// a unique compact i32 ID, keyed by structural equality of the full tuple.
/// Two rows receive the same ID exactly when they agree on every selected
/// column. The mapping preserves first-occurrence order for determinism.
///
/// An empty `columns` list maps every row to the same (empty) tuple. All
/// indices must satisfy `index < data.ncols()`; this is a caller
/// precondition and violations panic on row indexing.
pub fn reduce_columns_compact<T: Hash + Eq + Clone>(
    data: &Array2<T>,
    columns: &[usize],
) -> Array1<i32> {
    let n = data.nrows();
    let mut map: HashMap<Vec<T>, i32> = HashMap::new();
    let mut next_id: i32 = 0;
    let mut out: Vec<i32> = Vec::with_capacity(n);
    for row in data.axis_iter(Axis(0)) {
        let key: Vec<T> = columns.iter().map(|&c| row[c].clone()).collect();
        let id = *map.entry(key).or_insert_with(|| {
            let v = next_id;
            next_id = next_id
                .checked_add(1)
                .expect("Too many unique joint patterns to fit into i32");
            v
        });
        out.push(id);
    }
    Array1::from(out)
}

/// Deduplicated union of two column index lists, sorted ascending.
///
/// The ordering need not match either input; it only has to be
/// deterministic so that a derived measure uses one consistent union for
/// the joint term it feeds.
pub fn column_union(columns1: &[usize], columns2: &[usize]) -> Vec<usize> {
    let unique: HashSet<usize> = columns1.iter().chain(columns2.iter()).copied().collect();
    let mut union: Vec<usize> = unique.into_iter().collect();
    union.sort_unstable();
    union
}
