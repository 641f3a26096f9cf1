//! Matrix module: dense matrix types and traits.

pub mod dense;
pub use dense::{DenseMatrix, transpose};
