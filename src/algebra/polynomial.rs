//! Closed-form roots of polynomials up to degree three.
//!
//! Roots are returned as `Complex64` so that complex-conjugate pairs are not
//! lost; use [`real_roots`] to keep only the real ones. A vanishing leading
//! coefficient falls back to the next lower degree.
//!
//! # References
//! - Press et al., Numerical Recipes, §5.6 (quadratic and cubic equations)

use crate::error::{NError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Imaginary parts below this are treated as zero by [`real_roots`].
const IMAG_TOLERANCE: f64 = 1e-9;

/// Root of `a x + b = 0`.
pub fn solve_linear(a: f64, b: f64) -> Result<Vec<Complex64>> {
    if a == 0.0 {
        return Err(NError::InvalidArgument("linear coefficient is zero".into()));
    }
    Ok(vec![Complex64::new(-b / a, 0.0)])
}

/// Roots of `a x² + b x + c = 0`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Vec<Complex64>> {
    if a == 0.0 {
        return solve_linear(b, c);
    }
    let disc = b * b - 4.0 * a * c;
    if disc >= 0.0 {
        // q = -(b + sign(b)√disc)/2 avoids cancellation for the smaller root
        let sq = disc.sqrt();
        let q = -0.5 * (b + b.signum() * sq);
        if q == 0.0 {
            // b == 0 and c == 0: double root at the origin
            return Ok(vec![Complex64::new(0.0, 0.0); 2]);
        }
        let mut roots = [q / a, c / q];
        roots.sort_by(|x, y| x.total_cmp(y));
        return Ok(roots.iter().map(|&r| Complex64::new(r, 0.0)).collect());
    }
    let re = -b / (2.0 * a);
    let im = (-disc).sqrt() / (2.0 * a.abs());
    Ok(vec![Complex64::new(re, -im), Complex64::new(re, im)])
}

/// Roots of `a x³ + b x² + c x + d = 0` via the depressed cubic.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<Vec<Complex64>> {
    if a == 0.0 {
        return solve_quadratic(b, c, d);
    }
    // x = t - b/(3a) turns the cubic into t³ + p t + q = 0
    let shift = b / (3.0 * a);
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);
    let scale = 1e-12 * (1.0 + p.abs().powi(3) + q.abs().powi(2));

    let mut roots = if disc.abs() <= scale {
        if p.abs() <= 1e-12 {
            vec![Complex64::new(0.0, 0.0); 3]
        } else {
            let single = 3.0 * q / p;
            let double = -3.0 * q / (2.0 * p);
            vec![single, double, double]
                .into_iter()
                .map(|t| Complex64::new(t, 0.0))
                .collect()
        }
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        let u = (-q / 2.0 + sq).cbrt();
        let v = (-q / 2.0 - sq).cbrt();
        let re = -(u + v) / 2.0;
        let im = 3f64.sqrt() / 2.0 * (u - v);
        vec![
            Complex64::new(u + v, 0.0),
            Complex64::new(re, -im.abs()),
            Complex64::new(re, im.abs()),
        ]
    } else {
        // Three distinct real roots: trigonometric form
        let r = 2.0 * (-p / 3.0).sqrt();
        let arg = ((3.0 * q) / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let phi = arg.acos() / 3.0;
        (0..3)
            .map(|k| Complex64::new(r * (phi - 2.0 * PI * k as f64 / 3.0).cos(), 0.0))
            .collect()
    };
    for z in roots.iter_mut() {
        z.re -= shift;
    }
    roots.sort_by(|x, y| x.im.abs().total_cmp(&y.im.abs()).then(x.re.total_cmp(&y.re)));
    Ok(roots)
}

/// Roots of the polynomial with coefficients given highest degree first.
///
/// Leading zeros are stripped. A non-zero constant has no roots; the zero
/// polynomial is rejected, as is any degree above three.
pub fn polynomial_roots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    if coeffs.is_empty() {
        return Err(NError::EmptyInput("polynomial coefficients"));
    }
    let first = coeffs.iter().position(|&c| c != 0.0);
    let Some(first) = first else {
        return Err(NError::InvalidArgument("zero polynomial has infinitely many roots".into()));
    };
    match &coeffs[first..] {
        [_] => Ok(Vec::new()),
        [a, b] => solve_linear(*a, *b),
        [a, b, c] => solve_quadratic(*a, *b, *c),
        [a, b, c, d] => solve_cubic(*a, *b, *c, *d),
        _ => Err(NError::Unsupported("polynomial degree above 3")),
    }
}

/// Real parts of the roots whose imaginary part is negligible.
pub fn real_roots(roots: &[Complex64]) -> Vec<f64> {
    roots
        .iter()
        .filter(|z| z.im.abs() < IMAG_TOLERANCE)
        .map(|z| z.re)
        .collect()
}
