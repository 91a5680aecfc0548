//! Closed-form eigenvalues and eigenvectors of 2×2 matrices.
//!
//! λ solves λ² − tr(A) λ + det(A) = 0. A negative discriminant means a
//! complex pair, which is reported as `ComplexEigenvalues`.

use super::dense::DenseMatrix;
use crate::error::{NError, Result};
use faer::Mat;

fn check_2x2(a: &Mat<f64>) -> Result<()> {
    if a.require_square()? != 2 {
        return Err(NError::Unsupported("eigen decomposition is only defined for 2x2 matrices"));
    }
    Ok(())
}

/// Real eigenvalues of a 2×2 matrix, largest first.
pub fn eigenvalues(a: &Mat<f64>) -> Result<[f64; 2]> {
    check_2x2(a)?;
    let tr = a[(0, 0)] + a[(1, 1)];
    let det = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
    let disc = tr * tr - 4.0 * det;
    if disc < 0.0 {
        return Err(NError::ComplexEigenvalues);
    }
    let sq = disc.sqrt();
    Ok([(tr + sq) / 2.0, (tr - sq) / 2.0])
}

/// Unit eigenvectors, in the same order as [`eigenvalues`].
///
/// For a repeated eigenvalue of a scaled identity both standard basis
/// vectors are returned.
pub fn eigenvectors(a: &Mat<f64>) -> Result<[Vec<f64>; 2]> {
    let lambdas = eigenvalues(a)?;
    let (p, q, r, s) = (a[(0, 0)], a[(0, 1)], a[(1, 0)], a[(1, 1)]);
    let tiny = 1e-12 * (1.0 + p.abs().max(q.abs()).max(r.abs()).max(s.abs()));
    let vec_for = |lambda: f64, fallback: [f64; 2]| -> Vec<f64> {
        // (A - λI) v = 0; pick whichever row is non-degenerate
        let v = if q.abs() > tiny {
            [q, lambda - p]
        } else if r.abs() > tiny {
            [lambda - s, r]
        } else {
            fallback
        };
        let norm = (v[0] * v[0] + v[1] * v[1]).sqrt();
        vec![v[0] / norm, v[1] / norm]
    };
    if q.abs() <= tiny && r.abs() <= tiny {
        // diagonal: eigenvectors are the axes, ordered like the eigenvalues
        let first = if p >= s { [1.0, 0.0] } else { [0.0, 1.0] };
        let second = if p >= s { [0.0, 1.0] } else { [1.0, 0.0] };
        return Ok([vec_for(lambdas[0], first), vec_for(lambdas[1], second)]);
    }
    Ok([vec_for(lambdas[0], [1.0, 0.0]), vec_for(lambdas[1], [0.0, 1.0])])
}
