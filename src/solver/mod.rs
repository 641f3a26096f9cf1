//! Least-squares solver interfaces.

use crate::utils::stats::SolveStats;
use faer::Mat;

/// Common interface for least-squares solvers over dense faer matrices.
pub trait LeastSquaresSolver<T> {
    type Error;
    /// Minimize ||A·x - b||², starting from and writing the result into `x`.
    /// Returns per-solve stats (objective before and after).
    fn solve(
        &mut self,
        a: &Mat<T>,
        b: &[T],
        x: &mut [T],
    ) -> Result<SolveStats<T>, Self::Error>;
}

pub mod gradient;
pub use gradient::{evaluate_gradient, objective, objective_in};

pub mod descent;
pub use descent::{DescentWorkspace, GradientDescent, solve};
