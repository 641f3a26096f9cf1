//! Shared-memory parallelism for the matrix-vector kernel.
//!
//! Iterations of the descent are a strict dependency chain, so the only parallel
//! work is inside one matrix-vector product, where output rows are independent.

#[cfg(feature = "rayon")]
pub mod rayon_matvec;
#[cfg(feature = "rayon")]
pub use rayon_matvec::{ParMatRef, init_thread_pool};
