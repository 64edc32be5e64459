//! Scalar Euclidean distance kernel over coordinate vectors.
//!
//! The batch layer in the `pairwise` crate dispatches these over the rows
//! of paired point arrays.

use ndarray::ArrayView1;

/// Euclidean (L2) distance between two points of equal dimension.
///
/// Plain sum of squared coordinate differences followed by a square root;
/// no rescaling of large magnitudes is applied.
pub fn euc(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    f64::sqrt(euc_sq(a, b))
}

/// Squared Euclidean distance - the comparison-only variant without the sqrt.
pub fn euc_sq(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(a, b)| (a - b).powi(2)).sum()
}
