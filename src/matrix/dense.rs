//! Dense-matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait, which converts between the
//! row-sequence shape used at the API boundary and `faer::Mat<f64>`, and the
//! elementwise / product operations of the linear-algebra engine. Every binary
//! operation checks shapes up front and reports a mismatch instead of
//! panicking.

use crate::core::traits::MatVec;
use crate::error::{NError, Result, check_same_len};
use faer::Mat;

/// Conversion between nested rows and a dense `Mat<f64>`.
pub trait DenseMatrix: Sized {
    /// Construct from a non-empty, rectangular sequence of rows.
    fn from_rows(rows: &[Vec<f64>]) -> Result<Self>;
    /// Copy out as a sequence of rows.
    fn to_rows(&self) -> Vec<Vec<f64>>;
    /// Fails with `NotSquare` unless rows == cols.
    fn require_square(&self) -> Result<usize>;
}

impl DenseMatrix for Mat<f64> {
    fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        if ncols == 0 {
            return Err(NError::EmptyInput("matrix"));
        }
        for row in rows {
            check_same_len(ncols, row.len())?;
        }
        Ok(Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
    }

    fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.nrows())
            .map(|i| (0..self.ncols()).map(|j| self[(i, j)]).collect())
            .collect()
    }

    fn require_square(&self) -> Result<usize> {
        if self.nrows() != self.ncols() {
            return Err(NError::NotSquare { rows: self.nrows(), cols: self.ncols() });
        }
        Ok(self.nrows())
    }
}

/// Build a matrix from rows; see [`DenseMatrix::from_rows`].
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Mat<f64>> {
    <Mat<f64> as DenseMatrix>::from_rows(rows)
}

/// Copy a matrix out as rows.
pub fn to_rows(a: &Mat<f64>) -> Vec<Vec<f64>> {
    DenseMatrix::to_rows(a)
}

/// n×n identity.
pub fn identity(n: usize) -> Mat<f64> {
    Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
}

fn check_same_shape(a: &Mat<f64>, b: &Mat<f64>) -> Result<()> {
    check_same_len(a.nrows(), b.nrows())?;
    check_same_len(a.ncols(), b.ncols())
}

/// A + B.
pub fn add(a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>> {
    check_same_shape(a, b)?;
    Ok(Mat::from_fn(a.nrows(), a.ncols(), |i, j| a[(i, j)] + b[(i, j)]))
}

/// A - B.
pub fn subtract(a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>> {
    check_same_shape(a, b)?;
    Ok(Mat::from_fn(a.nrows(), a.ncols(), |i, j| a[(i, j)] - b[(i, j)]))
}

/// k · A.
pub fn scale(a: &Mat<f64>, k: f64) -> Mat<f64> {
    Mat::from_fn(a.nrows(), a.ncols(), |i, j| k * a[(i, j)])
}

/// A · B; requires cols(A) == rows(B).
pub fn multiply(a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>> {
    check_same_len(a.ncols(), b.nrows())?;
    Ok(Mat::from_fn(a.nrows(), b.ncols(), |i, j| {
        (0..a.ncols()).map(|k| a[(i, k)] * b[(k, j)]).sum()
    }))
}

/// A · x; requires cols(A) == len(x).
pub fn multiply_vector(a: &Mat<f64>, x: &[f64]) -> Result<Vec<f64>> {
    check_same_len(a.ncols(), x.len())?;
    let mut y = Vec::with_capacity(a.nrows());
    a.matvec(&x.to_vec(), &mut y);
    Ok(y)
}

/// Aᵀ.
pub fn transpose(a: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(a.ncols(), a.nrows(), |i, j| a[(j, i)])
}

/// Sum of the diagonal of a square matrix.
pub fn trace(a: &Mat<f64>) -> Result<f64> {
    let n = a.require_square()?;
    Ok((0..n).map(|i| a[(i, i)]).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Mat<f64> {
        from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn rejects_ragged_and_empty_rows() {
        assert_eq!(
            from_rows(&[vec![1.0, 2.0], vec![3.0]]).err(),
            Some(NError::DimensionMismatch { expected: 2, found: 1 })
        );
        assert_eq!(from_rows(&[]).err(), Some(NError::EmptyInput("matrix")));
        assert_eq!(from_rows(&[vec![]]).err(), Some(NError::EmptyInput("matrix")));
    }

    #[test]
    fn arithmetic() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(to_rows(&add(&a, &b).unwrap()), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
        assert_eq!(to_rows(&subtract(&b, &a).unwrap()), vec![vec![4.0, 4.0], vec![4.0, 4.0]]);
        assert_eq!(to_rows(&multiply(&a, &b).unwrap()), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
        assert_eq!(to_rows(&scale(&a, 2.0)), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
        assert_eq!(trace(&a).unwrap(), 5.0);
        assert_eq!(multiply_vector(&a, &[1.0, 1.0]).unwrap(), vec![3.0, 7.0]);
    }

    #[test]
    fn shape_errors() {
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = m(&[&[1.0, 2.0]]);
        assert!(add(&a, &b).is_err());
        assert!(multiply(&a, &b).is_err());
        assert_eq!(trace(&a), Err(NError::NotSquare { rows: 1, cols: 3 }));
    }

    #[test]
    fn transpose_rectangular() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = transpose(&a);
        assert_eq!((t.nrows(), t.ncols()), (3, 2));
        assert_eq!(t[(2, 1)], 6.0);
    }
}
