//! Numeric Laplace transform.

use crate::algebra::calculus::trapezoid;
use crate::config::IntegrationOptions;
use crate::error::{NError, Result};

/// ∫₀^∞ f(t)·e^{−st} dt, truncated at t = 100 and integrated with the
/// default trapezoid rule.
///
/// Only meaningful when f(t)e^{−st} has decayed by the truncation point;
/// growth in f is not detected.
pub fn laplace_transform<F: Fn(f64) -> f64>(f: F, s: f64) -> Result<f64> {
    laplace_transform_with(f, s, &IntegrationOptions::default())
}

pub fn laplace_transform_with<F: Fn(f64) -> f64>(f: F, s: f64, opts: &IntegrationOptions) -> Result<f64> {
    if !(s > 0.0) {
        return Err(NError::InvalidArgument(format!("s must be positive, got {s}")));
    }
    if opts.steps == 0 || !(opts.upper_limit > 0.0) {
        return Err(NError::InvalidArgument(format!(
            "integration needs panels and a positive upper limit, got {opts:?}"
        )));
    }
    let integrand = |t: f64| f(t) * (-s * t).exp();
    Ok(trapezoid(&integrand, 0.0, opts.upper_limit, opts.steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constant_and_exponential() {
        // L{1} = 1/s, L{e^{-t}} = 1/(s+1)
        assert_abs_diff_eq!(laplace_transform(|_| 1.0, 2.0).unwrap(), 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(laplace_transform(|t| (-t).exp(), 1.0).unwrap(), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn ramp() {
        // L{t} = 1/s²
        assert_abs_diff_eq!(laplace_transform(|t| t, 1.0).unwrap(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn custom_grid() {
        let opts = IntegrationOptions { steps: 20_000, upper_limit: 50.0 };
        let v = laplace_transform_with(|t| t.sin(), 1.0, &opts).unwrap();
        assert_abs_diff_eq!(v, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn rejects_non_positive_s() {
        assert!(laplace_transform(|_| 1.0, 0.0).is_err());
        assert!(laplace_transform(|_| 1.0, f64::NAN).is_err());
    }
}
