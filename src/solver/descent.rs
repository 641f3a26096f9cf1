//! Fixed-step gradient descent for dense linear least squares.
//!
//! Minimizes `f(x) = ||Ax - b||²` with the update `x ← x - step·∇f(x)`, running exactly
//! `iterations` steps. There is no line search, no adaptive step and no stopping test: the
//! iteration budget is the only terminal condition.
//!
//! # Memory
//!
//! All state lives in a [`DescentWorkspace`]: the working iterate `x`, the gradient and
//! residual buffers, and the materialized transpose `Aᵀ`. They are allocated once in
//! [`DescentWorkspace::new`]; [`DescentWorkspace::iterate`] with the serial kernel then
//! performs no heap allocation at all.
//!
//! # Divergence
//!
//! A step larger than `1 / λ_max(AᵀA)` makes the iterate blow up. That is not an error:
//! non-finite values propagate and show up in [`SolveStats::final_objective`].
//!
//! # Usage
//!
//! ```
//! use faer::Mat;
//! use lsgd::{DescentOptions, LsError};
//!
//! fn main() -> Result<(), LsError> {
//!     // A = [[1, 0], [0, 1], [1, 1]], b = [1, 2, 3]; least-squares solution x = [1, 2]
//!     let a = Mat::from_fn(3, 2, |i, j| if i == j || i == 2 { 1.0 } else { 0.0 });
//!     let b = [1.0, 2.0, 3.0];
//!     let opts = DescentOptions::<f64>::default().with_step(0.1);
//!     let x = lsgd::solve(&[0.0, 0.0], &a, &b, &opts)?;
//!     assert!((x[0] - 1.0).abs() < 1e-8);
//!     assert!((x[1] - 2.0).abs() < 1e-8);
//!     Ok(())
//! }
//! ```

use crate::config::{DescentOptions, Kernel};
use crate::core::traits::{MatShape, MatVec};
use crate::error::LsError;
use crate::matrix::transpose;
use crate::solver::LeastSquaresSolver;
use crate::solver::gradient::{evaluate_gradient, objective_in};
use crate::utils::stats::SolveStats;
use faer::{Mat, MatRef};
use num_traits::Float;
use tracing::{debug, warn};

/// Buffers owned by one solve: `(x, grad, residual)` plus `Aᵀ`.
pub struct DescentWorkspace<'a, T> {
    a: MatRef<'a, T>,
    b: &'a [T],
    at: Mat<T>,
    x: Vec<T>,
    grad: Vec<T>,
    residual: Vec<T>,
}

impl<'a, T: Float + Send + Sync> DescentWorkspace<'a, T> {
    /// Validates shapes, copies `x0`, allocates `grad`/`residual` and materializes `Aᵀ`.
    pub fn new(a: MatRef<'a, T>, b: &'a [T], x0: &[T]) -> Result<Self, LsError> {
        let (m, n) = (a.nrows(), a.ncols());
        LsError::check_len("solve rhs", m, b.len())?;
        LsError::check_len("solve initial guess", n, x0.len())?;
        Ok(Self {
            a,
            b,
            at: transpose(a),
            x: x0.to_vec(),
            grad: vec![T::zero(); n],
            residual: vec![T::zero(); m],
        })
    }

    /// Runs `iterations` fixed-size gradient steps in place.
    pub fn iterate(&mut self, iterations: usize, step: T, kernel: Kernel) -> Result<(), LsError> {
        let Self { a, b, at, x, grad, residual } = self;
        let at = (&*at).as_ref();
        match kernel {
            Kernel::Serial => descend(&*a, &at, *b, x, grad, residual, iterations, step),
            #[cfg(feature = "rayon")]
            Kernel::Rayon => {
                use crate::parallel::ParMatRef;
                descend(&ParMatRef::new(*a), &ParMatRef::new(at), *b, x, grad, residual, iterations, step)
            }
        }
    }

    /// `||A x - b||²` at the current iterate; overwrites the residual buffer.
    pub fn objective(&mut self) -> Result<T, LsError> {
        let a = self.a;
        objective_in(&mut self.residual, &a, self.b, &self.x)
    }

    /// Current iterate.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Gradient from the most recent iteration, evaluated at the pre-update iterate.
    pub fn grad(&self) -> &[T] {
        &self.grad
    }

    /// Residual from the most recent gradient or objective evaluation.
    pub fn residual(&self) -> &[T] {
        &self.residual
    }

    /// The transpose materialized for this solve.
    pub fn transposed(&self) -> MatRef<'_, T> {
        self.at.as_ref()
    }

    /// Consumes the workspace and hands back the final iterate.
    pub fn into_solution(self) -> Vec<T> {
        self.x
    }
}

#[allow(clippy::too_many_arguments)]
fn descend<T, M, Mt>(
    a: &M,
    at: &Mt,
    b: &[T],
    x: &mut [T],
    grad: &mut [T],
    residual: &mut [T],
    iterations: usize,
    step: T,
) -> Result<(), LsError>
where
    T: Float,
    M: MatVec<T> + MatShape,
    Mt: MatVec<T> + MatShape,
{
    for _ in 0..iterations {
        // full gradient at the current x before x moves
        let g = evaluate_gradient(grad, residual, x, a, b, at)?;
        for (xj, &gj) in x.iter_mut().zip(g.iter()) {
            *xj = *xj - step * gj;
        }
    }
    Ok(())
}

/// Runs fixed-step gradient descent from `x0` and returns the final iterate.
///
/// `x0` is copied, never mutated. With `opts.iterations == 0` the result equals `x0`.
pub fn solve<T: Float + Send + Sync>(
    x0: &[T],
    a: &Mat<T>,
    b: &[T],
    opts: &DescentOptions<T>,
) -> Result<Vec<T>, LsError> {
    let mut ws = DescentWorkspace::new(a.as_ref(), b, x0)?;
    ws.iterate(opts.iterations, opts.step, opts.kernel)?;
    Ok(ws.into_solution())
}

/// Gradient-descent solver struct.
///
/// Stores the iteration budget, step size and kernel.
#[derive(Debug, Clone)]
pub struct GradientDescent<T> {
    pub opts: DescentOptions<T>,
}

impl<T> GradientDescent<T> {
    /// Create a new solver with the given iteration count and step size.
    pub fn new(iterations: usize, step: T) -> Self {
        Self { opts: DescentOptions::new(iterations, step) }
    }

    /// Create a solver from a full set of options.
    pub fn with_options(opts: DescentOptions<T>) -> Self {
        Self { opts }
    }
}

impl Default for GradientDescent<f64> {
    fn default() -> Self {
        Self::with_options(DescentOptions::default())
    }
}

impl Default for GradientDescent<f32> {
    fn default() -> Self {
        Self::with_options(DescentOptions::default())
    }
}

impl<T: Float + Send + Sync> LeastSquaresSolver<T> for GradientDescent<T> {
    type Error = LsError;

    /// Minimize `||A x - b||²` starting from the contents of `x`.
    ///
    /// # Arguments
    /// * `a` - System matrix (m×n)
    /// * `b` - Right-hand side (length m)
    /// * `x` - Initial guess on entry, final iterate on exit (length n)
    ///
    /// Returns the objective before and after the run.
    fn solve(&mut self, a: &Mat<T>, b: &[T], x: &mut [T]) -> Result<SolveStats<T>, LsError> {
        let DescentOptions { iterations, step, kernel } = self.opts;
        let mut ws = DescentWorkspace::new(a.as_ref(), b, x)?;
        debug!(
            rows = a.nrows(),
            cols = a.ncols(),
            iterations,
            step = ?step.to_f64(),
            ?kernel,
            "starting gradient descent"
        );

        let initial_objective = ws.objective()?;
        ws.iterate(iterations, step, kernel)?;
        let final_objective = ws.objective()?;

        let stats = SolveStats { iterations, initial_objective, final_objective };
        debug!(
            initial_objective = ?initial_objective.to_f64(),
            final_objective = ?final_objective.to_f64(),
            "gradient descent finished"
        );
        if stats.diverged() {
            warn!(step = ?step.to_f64(), "objective is not finite; step too large for this matrix?");
        }
        x.copy_from_slice(ws.x());
        Ok(stats)
    }
}
