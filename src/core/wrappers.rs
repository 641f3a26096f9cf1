//! Wrappers for faer dense matrix types and slice vector operations.
//!
//! This module implements the core traits for `faer::Mat`, `faer::MatRef` and `[T]`,
//! so the gradient evaluator and descent driver can stay generic over the matrix operand.
//!
//! # Storage and loop order
//! Faer stores dense matrices column-major. The matrix-vector kernel nevertheless runs
//! row by row: for each output row `i` the accumulator starts at zero and adds
//! `A[i, j] * x[j]` for `j` in ascending order. The summation order is therefore fixed
//! and independent of storage, which makes results reproducible bit for bit.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{InnerProduct, MatShape, MatVec};
use crate::error::LsError;
use faer::{Mat, MatRef};
use num_traits::Float;

/// Serial row-wise kernel shared by the `Mat` and `MatRef` impls.
///
/// Elements are read in place; no row or column copy is made.
#[inline]
pub(crate) fn matvec_rows<T: Float>(a: MatRef<'_, T>, x: &[T], y: &mut [T]) -> Result<(), LsError> {
    LsError::check_len("matvec input", a.ncols(), x.len())?;
    LsError::check_len("matvec output", a.nrows(), y.len())?;
    for (i, yi) in y.iter_mut().enumerate() {
        let mut acc = T::zero();
        for (j, &xj) in x.iter().enumerate() {
            acc = acc + a[(i, j)] * xj;
        }
        *yi = acc;
    }
    Ok(())
}

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<T> for Mat<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), LsError> {
        matvec_rows(self.as_ref(), x, y)
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<T: Float> MatVec<T> for MatRef<'_, T> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), LsError> {
        matvec_rows(*self, x, y)
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T> MatShape for MatRef<'_, T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

/// Implements inner product and norm for slices.
///
/// Reductions run serially in ascending index order so repeated calls on the same
/// data give identical results.
impl<T: Float> InnerProduct<[T]> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &[T], y: &[T]) -> Result<T, LsError> {
        LsError::check_len("dot", x.len(), y.len())?;
        Ok(x.iter()
            .zip(y.iter())
            .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi))
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &[T]) -> T {
        x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).sqrt()
    }
}

/// Computes `out = m * v` through the [`MatVec`] trait.
///
/// Argument order follows the "output first" convention used by the evaluator.
pub fn matvec<T, M>(out: &mut [T], m: &M, v: &[T]) -> Result<(), LsError>
where
    M: MatVec<T> + ?Sized,
{
    m.matvec(v, out)
}
