//! Fixed-step steepest descent.

use crate::config::IterOptions;
use crate::core::traits::InnerProduct;
use crate::error::{NError, Result, check_same_len};
use crate::utils::convergence::{Convergence, SolveStats};

/// Final iterate of a minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimResult {
    pub x: Vec<f64>,
    /// f evaluated at `x`
    pub value: f64,
    pub stats: SolveStats<f64>,
}

/// Minimizes `f` by x ← x − lr·∇f(x).
///
/// Stops once ‖x_{k+1} − x_k‖₂ < `tol` or after `max_iter` steps; hitting
/// the cap is reported through `stats.converged`, not as an error. A
/// gradient of the wrong length is rejected.
pub fn gradient_descent<F, G>(
    f: F,
    grad: G,
    x0: &[f64],
    lr: f64,
    tol: f64,
    max_iter: usize,
) -> Result<OptimResult>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    if x0.is_empty() {
        return Err(NError::EmptyInput("starting point"));
    }
    if !(lr > 0.0) || !(tol > 0.0) {
        return Err(NError::InvalidArgument(format!(
            "learning rate and tolerance must be positive, got lr={lr}, tol={tol}"
        )));
    }
    let conv = Convergence::new(tol, max_iter);
    let mut x = x0.to_vec();
    let mut step = vec![0.0; x.len()];
    let mut stats = SolveStats { iterations: 0, final_residual: f64::INFINITY, converged: false };

    for i in 1..=conv.max_iters {
        let g = grad(&x);
        check_same_len(x.len(), g.len())?;
        for ((xj, sj), gj) in x.iter_mut().zip(step.iter_mut()).zip(&g) {
            *sj = lr * gj;
            *xj -= *sj;
        }
        let moved = ().norm(step.as_slice());
        let (stop, s) = conv.check(moved, i);
        stats = s;
        if stop {
            break;
        }
    }
    let value = f(&x);
    Ok(OptimResult { x, value, stats })
}

/// [`gradient_descent`] with tolerance and cap taken from `opts`.
pub fn gradient_descent_with<F, G>(f: F, grad: G, x0: &[f64], lr: f64, opts: &IterOptions) -> Result<OptimResult>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    gradient_descent(f, grad, x0, lr, opts.tol, opts.max_iters)
}

/// Linear program `min cᵀx s.t. Ax ≤ b, x ≥ 0`.
///
/// No simplex or interior-point method is provided; every call returns
/// `Unsupported` once the inputs have been shape-checked.
pub fn linear_programming(c: &[f64], a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    if c.is_empty() {
        return Err(NError::EmptyInput("objective"));
    }
    check_same_len(a.len(), b.len())?;
    for row in a {
        check_same_len(c.len(), row.len())?;
    }
    Err(NError::Unsupported("linear programming"))
}
