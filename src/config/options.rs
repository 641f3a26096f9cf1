//! API options for the gradient-descent driver.
//!
//! This module provides the `DescentOptions` struct, which fixes the iteration budget and
//! the step size of a solve, and selects the matrix-vector kernel used inside the loop.
//! There is no tolerance and no adaptive step: the driver always runs exactly
//! `iterations` steps of size `step`.

/// Matrix-vector kernel used by the descent loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// Single-threaded row-wise kernel. Allocation-free.
    #[default]
    Serial,
    /// Rows computed in parallel on the rayon pool; bit-identical to `Serial`.
    #[cfg(feature = "rayon")]
    Rayon,
}

/// Descent parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentOptions<T> {
    /// Number of gradient steps (0 returns the starting point unchanged)
    pub iterations: usize,

    /// Fixed step size applied to every update `x -= step * grad`
    pub step: T,

    /// Matrix-vector kernel
    pub kernel: Kernel,
}

/// Iteration budget used by the `Default` impls.
pub const DEFAULT_ITERATIONS: usize = 1000;

impl Default for DescentOptions<f64> {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, step: 1e-3, kernel: Kernel::Serial }
    }
}

impl Default for DescentOptions<f32> {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, step: 1e-3, kernel: Kernel::Serial }
    }
}

impl<T> DescentOptions<T> {
    /// Options with the given budget and step, on the serial kernel.
    pub fn new(iterations: usize, step: T) -> Self {
        Self { iterations, step, kernel: Kernel::Serial }
    }
    /// Replace the iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
    /// Replace the step size.
    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }
    /// Replace the matrix-vector kernel.
    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }
}
