//! Gaussian elimination without pivot selection.
//!
//! Rows are never exchanged, so the method only succeeds when every leading
//! pivot is safely away from zero; it aborts with `ZeroPivot` as soon as one
//! falls below [`PIVOT_EPSILON`]. Diagonally dominant systems (such as the
//! finite-difference matrices assembled by [`crate::solver::fem`]) always
//! qualify.

use crate::config::constants::PIVOT_EPSILON;
use crate::error::{NError, Result, check_same_len};
use crate::matrix::DenseMatrix;
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use faer::Mat;

/// Solve A x = b by forward elimination and back substitution.
pub fn solve_linear_system(a: &Mat<f64>, b: &[f64]) -> Result<Vec<f64>> {
    let n = a.require_square()?;
    check_same_len(n, b.len())?;
    let mut m = a.clone();
    let mut rhs = b.to_vec();

    for k in 0..n {
        let pivot = m[(k, k)];
        if pivot.abs() < PIVOT_EPSILON {
            return Err(NError::ZeroPivot(k));
        }
        for i in (k + 1)..n {
            let factor = m[(i, k)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                m[(i, j)] -= factor * m[(k, j)];
            }
            rhs[i] -= factor * rhs[k];
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|j| m[(i, j)] * x[j]).sum();
        x[i] = (rhs[i] - tail) / m[(i, i)];
    }
    Ok(x)
}

/// [`solve_linear_system`] behind the [`LinearSolver`] interface.
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussSolver;

impl GaussSolver {
    pub fn new() -> Self {
        GaussSolver
    }
}

impl LinearSolver<Mat<f64>, Vec<f64>> for GaussSolver {
    type Error = NError;

    fn solve(&mut self, a: &Mat<f64>, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>> {
        *x = solve_linear_system(a, b)?;
        Ok(SolveStats { iterations: 1, final_residual: 0.0, converged: true })
    }
}
