//! Scalar root finding: Newton–Raphson, bisection and secant.
//!
//! Each method iterates up to its cap and returns the last iterate together
//! with [`SolveStats`]; running out of iterations is an outcome, not an
//! error. Degenerate inputs (vanishing derivative, non-bracketing interval)
//! are errors.

use crate::config::IterOptions;
use crate::config::constants::DERIVATIVE_EPSILON;
use crate::error::{NError, Result};
use crate::utils::convergence::{Convergence, SolveStats};

/// Approximate root and how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    pub root: f64,
    pub stats: SolveStats<f64>,
}

fn convergence(tol: f64, max_iter: usize) -> Result<Convergence<f64>> {
    if !(tol > 0.0) {
        return Err(NError::InvalidArgument(format!("tolerance must be positive, got {tol}")));
    }
    Ok(Convergence::new(tol, max_iter))
}

fn not_started(x: f64) -> RootResult {
    RootResult {
        root: x,
        stats: SolveStats { iterations: 0, final_residual: f64::INFINITY, converged: false },
    }
}

/// Newton–Raphson: x ← x − f(x)/f'(x) until |Δx| < `tol`.
pub fn newton_method<F, D>(f: F, df: D, x0: f64, tol: f64, max_iter: usize) -> Result<RootResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let conv = convergence(tol, max_iter)?;
    let mut x = x0;
    let mut result = not_started(x0);
    for i in 1..=conv.max_iters {
        let d = df(x);
        if d.abs() < DERIVATIVE_EPSILON {
            return Err(NError::ZeroDerivative { iteration: i });
        }
        let next = x - f(x) / d;
        let (stop, stats) = conv.check(next - x, i);
        x = next;
        result = RootResult { root: x, stats };
        if stop {
            break;
        }
    }
    Ok(result)
}

/// [`newton_method`] with tolerance and cap taken from `opts`.
pub fn newton_method_with<F, D>(f: F, df: D, x0: f64, opts: &IterOptions) -> Result<RootResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    newton_method(f, df, x0, opts.tol, opts.max_iters)
}

/// Bisection on [a, b]; f(a) and f(b) must have opposite signs.
///
/// Stops once the bracket is narrower than `tol` or f hits zero exactly.
pub fn bisection_method<F>(f: F, a: f64, b: f64, tol: f64, max_iter: usize) -> Result<RootResult>
where
    F: Fn(f64) -> f64,
{
    let conv = convergence(tol, max_iter)?;
    if !(a < b) {
        return Err(NError::InvalidArgument(format!("empty bracket [{a}, {b}]")));
    }
    let (mut lo, mut hi) = (a, b);
    let (mut f_lo, f_hi) = (f(lo), f(hi));
    let exact = |x| RootResult {
        root: x,
        stats: SolveStats { iterations: 0, final_residual: 0.0, converged: true },
    };
    if f_lo == 0.0 {
        return Ok(exact(lo));
    }
    if f_hi == 0.0 {
        return Ok(exact(hi));
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(NError::SameSignBracket { fa: f_lo, fb: f_hi });
    }

    let mut result = not_started(0.5 * (lo + hi));
    for i in 1..=conv.max_iters {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(RootResult {
                root: mid,
                stats: SolveStats { iterations: i, final_residual: 0.0, converged: true },
            });
        }
        if f_lo.signum() == f_mid.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        let (stop, stats) = conv.check(hi - lo, i);
        result = RootResult { root: 0.5 * (lo + hi), stats };
        if stop {
            break;
        }
    }
    Ok(result)
}

/// Secant method from two starting points; no derivative needed.
pub fn secant_method<F>(f: F, x0: f64, x1: f64, tol: f64, max_iter: usize) -> Result<RootResult>
where
    F: Fn(f64) -> f64,
{
    let conv = convergence(tol, max_iter)?;
    let (mut prev, mut cur) = (x0, x1);
    let (mut f_prev, mut f_cur) = (f(prev), f(cur));
    let mut result = not_started(cur);
    for i in 1..=conv.max_iters {
        let slope = f_cur - f_prev;
        if slope.abs() < DERIVATIVE_EPSILON {
            return Err(NError::ZeroDerivative { iteration: i });
        }
        let next = cur - f_cur * (cur - prev) / slope;
        let (stop, stats) = conv.check(next - cur, i);
        (prev, f_prev) = (cur, f_cur);
        cur = next;
        f_cur = f(cur);
        result = RootResult { root: cur, stats };
        if stop {
            break;
        }
    }
    Ok(result)
}
