//! lsgd: allocation-free gradient descent for dense linear least squares over Faer
//!
//! This crate minimizes `f(x) = ||Ax - b||²` by fixed-step gradient descent with the
//! hand-derived gradient `2·Aᵀ(Ax - b)`. The solve is split into three layers:
//!
//! - a matrix-vector kernel writing into caller-supplied buffers ([`MatVec`], [`matvec`]),
//! - the residual/gradient evaluator ([`evaluate_gradient`]),
//! - the descent driver ([`solve`], [`GradientDescent`], [`DescentWorkspace`]).
//!
//! After a one-time setup (copy of `x0`, gradient and residual buffers, materialized `Aᵀ`)
//! the iteration loop performs no heap allocation.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::config::{DescentOptions, Kernel};
pub use crate::core::{InnerProduct, MatShape, MatVec, matvec};
pub use crate::error::LsError;
pub use crate::matrix::{DenseMatrix, transpose};
pub use crate::solver::{
    DescentWorkspace, GradientDescent, LeastSquaresSolver, evaluate_gradient, objective,
    objective_in, solve,
};
pub use crate::utils::SolveStats;

#[cfg(feature = "rayon")]
pub use crate::parallel::{ParMatRef, init_thread_pool};
