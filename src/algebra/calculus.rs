//! Finite-difference derivatives, quadrature and numeric limits.

use crate::config::IntegrationOptions;
use crate::config::constants::DIFF_STEP;
use crate::error::{NError, Result};

/// Step for the second difference; smaller steps lose more to cancellation.
const SECOND_DIFF_STEP: f64 = 1e-4;

/// Central-difference estimate of f'(x).
pub fn derivative<F: Fn(f64) -> f64>(f: F, x: f64) -> f64 {
    (f(x + DIFF_STEP) - f(x - DIFF_STEP)) / (2.0 * DIFF_STEP)
}

/// Central-difference estimate of f''(x).
pub fn second_derivative<F: Fn(f64) -> f64>(f: F, x: f64) -> f64 {
    let h = SECOND_DIFF_STEP;
    (f(x + h) - 2.0 * f(x) + f(x - h)) / (h * h)
}

/// Trapezoidal estimate of ∫ₐᵇ f(x) dx with the default panel count.
pub fn integrate<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> f64 {
    trapezoid(&f, a, b, IntegrationOptions::default().steps)
}

/// Trapezoidal estimate of ∫ₐᵇ f(x) dx over `steps` equal panels.
pub fn integrate_with<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: usize) -> Result<f64> {
    if steps == 0 {
        return Err(NError::InvalidArgument("integration needs at least one panel".into()));
    }
    Ok(trapezoid(&f, a, b, steps))
}

/// Composite Simpson estimate of ∫ₐᵇ f(x) dx. An odd `steps` is rounded up.
pub fn integrate_simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: usize) -> Result<f64> {
    if steps == 0 {
        return Err(NError::InvalidArgument("integration needs at least one panel".into()));
    }
    let n = steps + steps % 2;
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let w = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += w * f(a + i as f64 * h);
    }
    Ok(sum * h / 3.0)
}

pub(crate) fn trapezoid<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, steps: usize) -> f64 {
    let h = (b - a) / steps as f64;
    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..steps {
        sum += f(a + i as f64 * h);
    }
    sum * h
}

/// Numeric two-sided limit of f at x.
///
/// Samples f at x ± h for h = 10⁻¹ … 10⁻⁷ and returns the average of the
/// last pair. Fails with `NoLimit` when the one-sided estimates disagree.
pub fn limit<F: Fn(f64) -> f64>(f: F, x: f64) -> Result<f64> {
    let mut left = f64::NAN;
    let mut right = f64::NAN;
    for k in 1..=7 {
        let h = 10f64.powi(-k);
        let (l, r) = (f(x - h), f(x + h));
        if l.is_finite() {
            left = l;
        }
        if r.is_finite() {
            right = r;
        }
    }
    if !left.is_finite() || !right.is_finite() {
        return Err(NError::NoLimit { left, right });
    }
    if (left - right).abs() > 1e-4 * (1.0 + left.abs().max(right.abs())) {
        return Err(NError::NoLimit { left, right });
    }
    Ok(0.5 * (left + right))
}
