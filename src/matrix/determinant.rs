//! Determinant, cofactors, adjugate and the closed-form inverse.
//!
//! The determinant is a Laplace expansion along the first row. Its cost is
//! O(n!), so inputs are capped at [`MAX_COFACTOR_ORDER`]; use
//! [`crate::solver::LuSolver`] for anything larger.

use super::dense::{DenseMatrix, scale};
use crate::config::constants::{MAX_COFACTOR_ORDER, SINGULAR_EPSILON};
use crate::error::{NError, Result};
use faer::Mat;

fn check_expandable(a: &Mat<f64>) -> Result<usize> {
    let n = a.require_square()?;
    if n == 0 {
        return Err(NError::EmptyInput("matrix"));
    }
    if n > MAX_COFACTOR_ORDER {
        return Err(NError::InvalidArgument(format!(
            "cofactor expansion is limited to order {MAX_COFACTOR_ORDER}, got {n}"
        )));
    }
    Ok(n)
}

/// The matrix with row `row` and column `col` removed.
pub fn minor(a: &Mat<f64>, row: usize, col: usize) -> Result<Mat<f64>> {
    let n = a.require_square()?;
    if n < 2 || row >= n || col >= n {
        return Err(NError::InvalidArgument(format!(
            "no ({row}, {col}) minor of a {n}x{n} matrix"
        )));
    }
    Ok(minor_unchecked(a, row, col))
}

fn minor_unchecked(a: &Mat<f64>, row: usize, col: usize) -> Mat<f64> {
    let n = a.nrows();
    Mat::from_fn(n - 1, n - 1, |i, j| {
        let si = if i < row { i } else { i + 1 };
        let sj = if j < col { j } else { j + 1 };
        a[(si, sj)]
    })
}

fn det_expand(a: &Mat<f64>) -> f64 {
    match a.nrows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => {
            let mut det = 0.0;
            for j in 0..n {
                let a0j = a[(0, j)];
                if a0j == 0.0 {
                    continue;
                }
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                det += sign * a0j * det_expand(&minor_unchecked(a, 0, j));
            }
            det
        }
    }
}

/// det(A) by cofactor expansion; closed forms for 1×1 and 2×2.
pub fn determinant(a: &Mat<f64>) -> Result<f64> {
    check_expandable(a)?;
    Ok(det_expand(a))
}

/// Signed cofactor C_ij = (-1)^(i+j) · det(minor_ij).
pub fn cofactor(a: &Mat<f64>, row: usize, col: usize) -> Result<f64> {
    check_expandable(a)?;
    let m = minor(a, row, col)?;
    let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
    Ok(sign * det_expand(&m))
}

/// Transpose of the cofactor matrix. The adjugate of a 1×1 matrix is [1].
pub fn adjugate(a: &Mat<f64>) -> Result<Mat<f64>> {
    let n = check_expandable(a)?;
    if n == 1 {
        return Ok(Mat::from_fn(1, 1, |_, _| 1.0));
    }
    let mut adj = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            // transpose while storing
            adj[(j, i)] = sign * det_expand(&minor_unchecked(a, i, j));
        }
    }
    Ok(adj)
}

/// A⁻¹ = adj(A) / det(A).
///
/// Fails with `Singular` when |det(A)| < [`SINGULAR_EPSILON`].
pub fn inverse(a: &Mat<f64>) -> Result<Mat<f64>> {
    let det = determinant(a)?;
    if det.abs() < SINGULAR_EPSILON {
        return Err(NError::Singular);
    }
    Ok(scale(&adjugate(a)?, 1.0 / det))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::dense::{from_rows, identity, to_rows};
    use approx::assert_abs_diff_eq;

    #[test]
    fn small_determinants() {
        let a = from_rows(&[vec![3.0]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), 3.0);
        let a = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), -2.0);
        let a = from_rows(&[
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ])
        .unwrap();
        assert_abs_diff_eq!(determinant(&a).unwrap(), -306.0, epsilon = 1e-9);
    }

    #[test]
    fn identity_and_zero_row() {
        for n in 1..=6 {
            assert_eq!(determinant(&identity(n)).unwrap(), 1.0);
        }
        let a = from_rows(&[vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0], vec![7.0, 8.0, 9.0]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn size_guard_and_shape() {
        assert!(determinant(&identity(MAX_COFACTOR_ORDER + 1)).is_err());
        let a = from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert_eq!(determinant(&a).err(), Some(NError::NotSquare { rows: 1, cols: 2 }));
    }

    #[test]
    fn adjugate_and_inverse_2x2() {
        let a = from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        assert_eq!(to_rows(&adjugate(&a).unwrap()), vec![vec![6.0, -7.0], vec![-2.0, 4.0]]);
        let inv = inverse(&a).unwrap();
        assert_abs_diff_eq!(inv[(0, 0)], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(0, 1)], -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(1, 0)], -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(1, 1)], 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(cofactor(&a, 0, 1).unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_has_no_inverse() {
        let a = from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(inverse(&a).err(), Some(NError::Singular));
    }

    #[test]
    fn minor_bounds() {
        let a = identity(3);
        assert_eq!(to_rows(&minor(&a, 0, 0).unwrap()), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(minor(&a, 3, 0).is_err());
        assert!(minor(&identity(1), 0, 0).is_err());
    }
}
