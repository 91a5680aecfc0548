//! One-dimensional finite-difference stiffness solve for u'' = f(x).
//!
//! Interior rows are the three-point stencil scaled by h²,
//! `u[i-1] - 2 u[i] + u[i+1] = h² f(x[i])`; the first and last rows pin the
//! Dirichlet values. The assembled system is diagonally dominant, so the
//! pivot-free Gaussian elimination is always safe on it.

use crate::error::{NError, Result};
use crate::solver::gauss::solve_linear_system;
use faer::Mat;

/// Relative tolerance when checking that nodes are evenly spaced.
const SPACING_TOLERANCE: f64 = 1e-9;

fn uniform_spacing(nodes: &[f64]) -> Result<f64> {
    if nodes.len() < 2 {
        return Err(NError::InvalidArgument(format!(
            "at least two nodes are required, got {}",
            nodes.len()
        )));
    }
    let h = nodes[1] - nodes[0];
    if !(h > 0.0) {
        return Err(NError::InvalidArgument("nodes must be strictly increasing".into()));
    }
    for w in nodes.windows(2) {
        if ((w[1] - w[0]) - h).abs() > SPACING_TOLERANCE * h.abs().max(1.0) {
            return Err(NError::InvalidArgument("nodes must be uniformly spaced".into()));
        }
    }
    Ok(h)
}

/// Nodal values of u with u'' = f(x), u(first) = `boundary.0`, u(last) = `boundary.1`.
pub fn solve_fem<F>(f: F, nodes: &[f64], boundary: (f64, f64)) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    let h = uniform_spacing(nodes)?;
    let n = nodes.len();
    let mut k = Mat::<f64>::zeros(n, n);
    let mut rhs = vec![0.0; n];

    k[(0, 0)] = 1.0;
    rhs[0] = boundary.0;
    k[(n - 1, n - 1)] = 1.0;
    rhs[n - 1] = boundary.1;
    for i in 1..n - 1 {
        k[(i, i - 1)] = 1.0;
        k[(i, i)] = -2.0;
        k[(i, i + 1)] = 1.0;
        rhs[i] = h * h * f(nodes[i]);
    }
    solve_linear_system(&k, &rhs)
}
