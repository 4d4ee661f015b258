// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infotheory::estimators::entropy::Entropy;
use infotheory::estimators::{GlobalValue, LocalValues};
use ndarray::{array, Array1, Array2};
use rstest::rstest;

use crate::test_helpers::generate_random_matrix;

#[test]
fn joint_entropy_independent_uniform_binary() {
    // Two independent uniform binary columns, each combination once: 2 bits.
    let data = array![[0, 0], [0, 1], [1, 0], [1, 1]];
    let h = Entropy::new_discrete_joint(&data, &[0, 1]).global_value();
    assert_abs_diff_eq!(h, 2.0, epsilon = 1e-12);
}

#[test]
fn joint_entropy_single_column_matches_sequence_entropy() {
    let data = generate_random_matrix(150, 3, 4, 7);
    for col in 0..3 {
        let column = data.column(col).to_owned();
        let h_seq = Entropy::new_discrete(column).global_value();
        let h_joint = Entropy::new_discrete_joint(&data, &[col]).global_value();
        assert_abs_diff_eq!(h_seq, h_joint, epsilon = 1e-12);
    }
}

#[rstest]
#[case(&[0, 1], &[1, 0])]
#[case(&[0, 1, 2], &[2, 0, 1])]
fn joint_entropy_is_column_order_invariant(#[case] cols_a: &[usize], #[case] cols_b: &[usize]) {
    // Key construction follows the column order, but the induced row
    // partition (and hence the entropy) does not.
    let data = generate_random_matrix(200, 3, 3, 11);
    let h_a = Entropy::new_discrete_joint(&data, cols_a).global_value();
    let h_b = Entropy::new_discrete_joint(&data, cols_b).global_value();
    assert_abs_diff_eq!(h_a, h_b, epsilon = 1e-12);
}

#[test]
fn joint_entropy_repeated_column_adds_nothing() {
    // [c, c] induces the same partition as [c].
    let data = generate_random_matrix(100, 2, 5, 21);
    let h_once = Entropy::new_discrete_joint(&data, &[0]).global_value();
    let h_twice = Entropy::new_discrete_joint(&data, &[0, 0]).global_value();
    assert_abs_diff_eq!(h_once, h_twice, epsilon = 1e-12);
}

#[test]
fn joint_entropy_empty_column_list_is_zero_for_nonempty_matrix() {
    // All rows collapse onto the single empty key.
    let data = generate_random_matrix(50, 2, 4, 33);
    let h = Entropy::new_discrete_joint(&data, &[]).global_value();
    assert_eq!(h, 0.0);
}

#[rstest]
#[case(2.0)]
#[case(std::f64::consts::E)]
fn joint_entropy_of_zero_row_matrix_is_nan(#[case] base: f64) {
    let data = Array2::<i32>::zeros((0, 3));
    let h = Entropy::new_discrete_joint_with_base(&data, &[0, 2], base).global_value();
    assert!(h.is_nan());
}

#[test]
fn joint_entropy_fully_correlated_columns() {
    // Second column is a function of the first; the pair carries no more
    // information than either column alone.
    let col: Vec<i32> = vec![0, 1, 2, 0, 1, 2, 0, 1, 2];
    let mirrored: Vec<i32> = col.iter().map(|&v| v * 10).collect();
    let data = Array2::from_shape_vec(
        (col.len(), 2),
        col.iter().zip(mirrored.iter()).flat_map(|(&a, &b)| [a, b]).collect(),
    )
    .unwrap();

    let h_first = Entropy::new_discrete_joint(&data, &[0]).global_value();
    let h_pair = Entropy::new_discrete_joint(&data, &[0, 1]).global_value();
    assert_abs_diff_eq!(h_pair, h_first, epsilon = 1e-12);
}

#[test]
fn joint_entropy_local_values_align_with_rows() {
    let data = array![[0, 0], [0, 0], [1, 1], [1, 2]];
    let est = Entropy::new_discrete_joint(&data, &[0, 1]);

    // Keys: (0,0) twice, (1,1) once, (1,2) once.
    let locals = est.local_values();
    let surprisal_half = -(0.5f64.log2());
    let surprisal_quarter = -(0.25f64.log2());
    let expected = [
        surprisal_half,
        surprisal_half,
        surprisal_quarter,
        surprisal_quarter,
    ];
    assert_eq!(locals.len(), 4);
    for (i, &val) in locals.iter().enumerate() {
        assert_abs_diff_eq!(val, expected[i], epsilon = 1e-12);
    }
    assert_abs_diff_eq!(est.global_value(), est.global_from_local(), epsilon = 1e-12);
}

#[test]
fn joint_entropy_over_string_values() {
    let data = Array1::from(vec!["a", "b", "a", "b", "c", "c"])
        .into_shape_with_order((3, 2))
        .unwrap();
    // Rows: ("a","b"), ("a","b"), ("c","c") -> counts 2 and 1.
    let h = Entropy::new_discrete_joint(&data, &[0, 1]).global_value();
    let expected = -(2.0 / 3.0) * (2.0f64 / 3.0).log2() - (1.0 / 3.0) * (1.0f64 / 3.0).log2();
    assert_abs_diff_eq!(h, expected, epsilon = 1e-12);
}
