//! Convergence tracking & tolerance checks for iterative methods.

use crate::config::IterOptions;

/// Stopping criteria.
#[derive(Debug, Clone, Copy)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

/// Outcome record returned alongside every iterative result.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    /// Last measured step, bracket width or centroid shift
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { tol, max_iters }
    }

    /// Returns (should_stop, stats) given the current `residual` at iteration `i`.
    ///
    /// A NaN residual never counts as converged.
    pub fn check(&self, residual: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = residual.abs() < self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: residual,
                converged,
            },
        )
    }
}

impl From<IterOptions> for Convergence<f64> {
    fn from(opts: IterOptions) -> Self {
        Self { tol: opts.tol, max_iters: opts.max_iters }
    }
}
