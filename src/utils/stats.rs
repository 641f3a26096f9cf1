//! Per-solve statistics.

/// Objective values bracketing a fixed-budget descent run.
///
/// Both objectives are evaluated outside the iteration loop. A `final_objective`
/// above `initial_objective` (or non-finite) means the step was too large for the
/// conditioning of `AᵀA`; that is reported here, not raised as an error.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub initial_objective: T,
    pub final_objective: T,
}

impl<T: Copy + num_traits::Float> SolveStats<T> {
    /// True when the run lowered `||Ax - b||²`.
    pub fn improved(&self) -> bool {
        self.final_objective < self.initial_objective
    }

    /// True when the final objective is NaN or infinite.
    pub fn diverged(&self) -> bool {
        !self.final_objective.is_finite()
    }
}
