//! Residual and gradient evaluation for the least-squares objective `f(x) = ||Ax - b||²`.
//!
//! The gradient is hand-derived: `∇f(x) = 2·Aᵀ(Ax - b)`. Evaluation is two matrix-vector
//! products into caller-owned buffers followed by one in-place scale by two, so it never
//! allocates.

use crate::core::traits::{InnerProduct, MatShape, MatVec};
use crate::error::LsError;
use num_traits::Float;

/// Computes `residual := A x - b` and `grad := 2 Aᵀ residual`, returning `grad`.
///
/// `at` must be the materialized transpose of `a` (see [`crate::matrix::transpose`]); it is
/// taken as a separate operand so that it can be computed once per solve instead of per call.
///
/// # Errors
/// `DimensionMismatch` when `x.len() != ncols(A)`, `b.len() != nrows(A)`,
/// `residual.len() != nrows(A)`, `grad.len() != ncols(A)`, or when `at` does not have the
/// transposed shape.
pub fn evaluate_gradient<'g, T, M, Mt>(
    grad: &'g mut [T],
    residual: &mut [T],
    x: &[T],
    a: &M,
    b: &[T],
    at: &Mt,
) -> Result<&'g mut [T], LsError>
where
    T: Float,
    M: MatVec<T> + MatShape + ?Sized,
    Mt: MatVec<T> + MatShape + ?Sized,
{
    LsError::check_len("evaluate_gradient rhs", a.nrows(), b.len())?;
    LsError::check_len("evaluate_gradient transpose rows", a.ncols(), at.nrows())?;
    LsError::check_len("evaluate_gradient transpose cols", a.nrows(), at.ncols())?;
    LsError::check_len("evaluate_gradient x", a.ncols(), x.len())?;
    LsError::check_len("evaluate_gradient residual", a.nrows(), residual.len())?;
    LsError::check_len("evaluate_gradient grad", a.ncols(), grad.len())?;

    a.matvec(x, residual)?;
    for (ri, &bi) in residual.iter_mut().zip(b) {
        *ri = *ri - bi;
    }

    at.matvec(residual, grad)?;
    let two = T::one() + T::one();
    for gj in grad.iter_mut() {
        *gj = two * *gj;
    }
    Ok(grad)
}

/// Evaluates `||A x - b||²`, writing `A x - b` into `residual` on the way.
pub fn objective_in<T, M>(residual: &mut [T], a: &M, b: &[T], x: &[T]) -> Result<T, LsError>
where
    T: Float,
    M: MatVec<T> + MatShape + ?Sized,
{
    LsError::check_len("objective rhs", a.nrows(), b.len())?;
    a.matvec(x, residual)?;
    for (ri, &bi) in residual.iter_mut().zip(b) {
        *ri = *ri - bi;
    }
    let ip = ();
    let r: &[T] = residual;
    ip.dot(r, r)
}

/// Allocating convenience wrapper around [`objective_in`].
pub fn objective<T, M>(a: &M, b: &[T], x: &[T]) -> Result<T, LsError>
where
    T: Float,
    M: MatVec<T> + MatShape + ?Sized,
{
    let mut residual = vec![T::zero(); a.nrows()];
    objective_in(&mut residual, a, b, x)
}
