//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from raw column-major or row-major storage, and the materialized
//! transpose used by the gradient evaluator.

use crate::core::traits::{MatShape, MatVec};
use crate::error::LsError;
use faer::{Mat, MatRef};
use num_traits::Float;

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
pub trait DenseMatrix<T>: MatVec<T> + MatShape + Sized {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, LsError>;
    /// Construct from raw row-major storage.
    fn from_row_major(nrows: usize, ncols: usize, data: &[T]) -> Result<Self, LsError>;
}

/// Checks `found == nrows * ncols`; an overflowing product is reported as `usize::MAX`.
fn check_storage(op: &'static str, nrows: usize, ncols: usize, found: usize) -> Result<(), LsError> {
    let expected = nrows.checked_mul(ncols).ok_or(LsError::DimensionMismatch {
        op,
        expected: usize::MAX,
        found,
    })?;
    LsError::check_len(op, expected, found)
}

impl<T: Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, LsError> {
        check_storage("from_raw", nrows, ncols, data.len())?;
        Ok(Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i]))
    }

    fn from_row_major(nrows: usize, ncols: usize, data: &[T]) -> Result<Self, LsError> {
        check_storage("from_row_major", nrows, ncols, data.len())?;
        Ok(Mat::from_fn(nrows, ncols, |i, j| data[i * ncols + j]))
    }
}

/// Materializes `Aᵀ` as an owned matrix, so that `At[(j, i)] == A[(i, j)]`.
///
/// The copy is element by element; faer's lazy `transpose()` view is not used because
/// the evaluator needs `Aᵀ` with its own row-wise access pattern.
pub fn transpose<T: Float>(a: MatRef<'_, T>) -> Mat<T> {
    Mat::from_fn(a.ncols(), a.nrows(), |j, i| a[(i, j)])
}
