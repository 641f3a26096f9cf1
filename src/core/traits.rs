//! Core linear-algebra traits for lsgd.

use crate::error::LsError;

/// Matrix–vector product into a caller-supplied buffer: y ← A x.
pub trait MatVec<T> {
    /// Compute y = A · x, overwriting every element of `y`.
    ///
    /// Fails with [`LsError::DimensionMismatch`] unless `x.len() == ncols`
    /// and `y.len() == nrows`.
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), LsError>;
}

/// Inner products & norms.
pub trait InnerProduct<V: ?Sized> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar, LsError>;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Row/column counts of a matrix operand.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}
