//! Batched Euclidean distances over paired rows of two point arrays.
//!
//! Both inputs are `(batch, n)` arrays with the coordinate axis last; row i
//! of the first array pairs exclusively with row i of the second. The
//! output holds one distance per row pair. Shapes are checked up front and
//! a mismatch fails the whole call before any distance is computed.

use euclid::euc;
use ndarray::{Array1, ArrayView2, Zip};
use thiserror::Error;

/// The two point arrays cannot be paired row-for-row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("point arrays must have identical shape, got {lhs:?} and {rhs:?}")]
pub struct ShapeMismatch {
    pub lhs: (usize, usize),
    pub rhs: (usize, usize),
}

fn check_shapes(points1: &ArrayView2<f64>, points2: &ArrayView2<f64>) -> Result<(), ShapeMismatch> {
    if points1.dim() != points2.dim() {
        return Err(ShapeMismatch {
            lhs: points1.dim(),
            rhs: points2.dim(),
        });
    }
    Ok(())
}

/// Distance between each row of `points1` and the same row of `points2`.
pub fn distances(
    points1: ArrayView2<f64>,
    points2: ArrayView2<f64>,
) -> Result<Array1<f64>, ShapeMismatch> {
    check_shapes(&points1, &points2)?;
    Ok(points1
        .rows()
        .into_iter()
        .zip(points2.rows())
        .map(|(p, q)| euc(p, q))
        .collect())
}

/// Same as [`distances`], computed in parallel across rows.
///
/// Each row pair is independent, so the batch loop parallelises without
/// any shared state. Results are identical to the sequential path.
pub fn distances_par(
    points1: ArrayView2<f64>,
    points2: ArrayView2<f64>,
) -> Result<Array1<f64>, ShapeMismatch> {
    check_shapes(&points1, &points2)?;
    let mut result = Array1::zeros(points1.nrows());
    Zip::from(&mut result)
        .and(points1.rows())
        .and(points2.rows())
        .par_for_each(|d, p, q| *d = euc(p, q));
    Ok(result)
}
