//! Ordinary least squares.

use crate::error::{NError, Result, check_same_len};
use crate::matrix::from_rows;
use crate::solver::solve_linear_system;

/// Fitted line y = slope · x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination on the training data
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Closed-form OLS fit of `y` on `x`.
///
/// Fails with `Singular` when every `x` is equal (vertical line).
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    check_same_len(x.len(), y.len())?;
    if x.is_empty() {
        return Err(NError::EmptyInput("sample"));
    }
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let sxx: f64 = x.iter().map(|v| (v - mx) * (v - mx)).sum();
    let sxy: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    if sxx == 0.0 {
        return Err(NError::Singular);
    }
    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let ss_tot: f64 = y.iter().map(|v| (v - my) * (v - my)).sum();
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| {
            let r = b - (slope * a + intercept);
            r * r
        })
        .sum();
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };
    Ok(LinearFit { slope, intercept, r_squared })
}

/// [`linear_regression`] over `(x, y)` points.
pub fn least_squares(points: &[(f64, f64)]) -> Result<LinearFit> {
    let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    linear_regression(&x, &y)
}

/// Multivariate OLS via the normal equations (XᵀX) β = Xᵀy.
///
/// Returns `[intercept, b₁, …, b_d]`. Collinear features make the normal
/// matrix singular and surface as `ZeroPivot`.
pub fn multiple_regression(data: &[(Vec<f64>, f64)]) -> Result<Vec<f64>> {
    let dim = super::check_points(data.iter().map(|(x, _)| x.as_slice()))?;
    let p = dim + 1;
    let mut xtx = vec![vec![0.0; p]; p];
    let mut xty = vec![0.0; p];
    for (x, y) in data {
        // design row [1, x₁, …, x_d]
        let row: Vec<f64> = std::iter::once(1.0).chain(x.iter().copied()).collect();
        for i in 0..p {
            xty[i] += row[i] * y;
            for j in 0..p {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    solve_linear_system(&from_rows(&xtx)?, &xty)
}
