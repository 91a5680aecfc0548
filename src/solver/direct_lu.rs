//! Direct dense solver using Faer's fully pivoted LU.
//!
//! Unlike [`crate::solver::GaussSolver`], this exchanges rows and columns, so it
//! handles any non-singular system and is not bound by the cofactor size cap.
//!
//! # References
//! - Faer documentation: https://github.com/sarah-ek/faer-rs
//! - Golub & Van Loan, Matrix Computations

use crate::error::{NError, Result, check_same_len};
use crate::matrix::DenseMatrix;
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use faer::linalg::solvers::{FullPivLu, SolveCore};
use faer::{Conj, Mat, MatMut};

/// LU solver using full pivoting from Faer.
///
/// Stores the LU factorization for reuse.
pub struct LuSolver {
    /// Cached LU factorization (if computed) and the order it was built for
    factor: Option<(FullPivLu<f64>, usize)>,
}

impl LuSolver {
    /// Create a new LU solver (no factorization yet).
    pub fn new() -> Self {
        LuSolver { factor: None }
    }

    /// Solve using the cached LU factorization.
    pub fn solve_cached(&self, b: &[f64]) -> Result<Vec<f64>> {
        let (factor, n) = self
            .factor
            .as_ref()
            .ok_or(NError::Unsupported("solve_cached called before factorization"))?;
        check_same_len(*n, b.len())?;
        let n = *n;
        let mut x = b.to_vec();
        let x_mat = MatMut::from_column_major_slice_mut(x.as_mut_slice(), n, 1);
        factor.solve_in_place_with_conj(Conj::No, x_mat);
        if x.iter().any(|v| !v.is_finite()) {
            return Err(NError::Singular);
        }
        Ok(x)
    }
}

impl LinearSolver<Mat<f64>, Vec<f64>> for LuSolver {
    type Error = NError;

    /// Solve Ax = b using LU factorization (full pivoting).
    ///
    /// A singular `a` shows up as non-finite entries and is reported as `Singular`.
    fn solve(&mut self, a: &Mat<f64>, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>> {
        let n = a.require_square()?;
        check_same_len(n, b.len())?;
        self.factor = Some((FullPivLu::new(a.as_ref()), n));
        *x = self.solve_cached(b)?;
        Ok(SolveStats { iterations: 1, final_residual: 0.0, converged: true })
    }
}

impl Default for LuSolver {
    fn default() -> Self {
        Self::new()
    }
}
