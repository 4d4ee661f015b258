// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infotheory
//!
//! Exact plug-in estimates of discrete information-theoretic measures
//! (entropy, joint entropy, mutual information, conditional entropy) over
//! samples of discrete random variables, with an arbitrary logarithm base.
//!
//! ## Quick Start
//!
//! ```rust
//! use infotheory::estimators::entropy::Entropy;
//! use infotheory::estimators::mutual_information::MutualInformation;
//! use infotheory::estimators::traits::GlobalValue;
//! use ndarray::{array, Array1};
//!
//! // Entropy of a single discrete sequence, in bits
//! let data = Array1::from(vec![0, 0, 1, 1]);
//! let h = Entropy::new_discrete(data).global_value();
//! assert_eq!(h, 1.0);
//!
//! // Mutual information between column sets of a sample matrix
//! let samples = array![[0, 0], [0, 1], [1, 0], [1, 1]];
//! let mi = MutualInformation::new_discrete(&samples, &[0], &[1]).global_value();
//! assert!(mi.abs() < 1e-12);
//! ```
//!
//! ## Data model
//!
//! Samples live in an [`ndarray::Array2`] of shape (samples, variables); a
//! single variable is an [`ndarray::Array1`]. Values may be of any discrete
//! type that is `Hash + Eq + Clone` (integers, strings, ...). Multi-column
//! joint variables are keyed structurally by the tuple of selected values,
//! so two rows count as equal exactly when they agree on every selected
//! column.
//!
//! ## Semantics
//!
//! All measures are maximum-likelihood plug-in estimates: probabilities are
//! empirical frequencies over the observed symbols, and the entropy sum runs
//! over observed symbols only. The entropy of an empty sample is undefined
//! and reported as NaN; derived measures propagate that NaN rather than
//! treating it as zero. Every call is a pure function of its inputs with no
//! shared or persistent state, so independent calls may run on independent
//! threads.
//!
//! ## Caller contract
//!
//! Column indices are zero-based and must lie within the matrix width, and
//! the logarithm base must be positive and not 1. These preconditions are
//! owned by the caller and are not re-validated in the hot path; an
//! out-of-range index panics via ndarray's bounds check.

pub mod estimators;
