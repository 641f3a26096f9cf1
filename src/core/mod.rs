//! Core traits and their faer/slice implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatShape, MatVec};
pub use wrappers::matvec;
