//! Probability density and mass functions.
//!
//! Parameters are validated: probabilities must lie in [0, 1] and scale or
//! rate parameters must be strictly positive.

use crate::error::{NError, Result};
use std::f64::consts::PI;

fn positive(name: &str, v: f64) -> Result<()> {
    if !(v > 0.0) || !v.is_finite() {
        return Err(NError::InvalidArgument(format!("{name} must be positive, got {v}")));
    }
    Ok(())
}

fn probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(NError::InvalidArgument(format!("probability {p} outside [0, 1]")));
    }
    Ok(())
}

/// Above this, ln(n!) switches from the direct sum to Stirling's series.
const STIRLING_THRESHOLD: u64 = 256;

/// ln(n!); a direct sum for small n, Stirling's series with three
/// correction terms beyond [`STIRLING_THRESHOLD`].
fn ln_factorial(n: u64) -> f64 {
    if n <= STIRLING_THRESHOLD {
        return (2..=n).map(|k| (k as f64).ln()).sum();
    }
    let x = n as f64;
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    x * x.ln() - x + 0.5 * (2.0 * PI * x).ln() + inv * (1.0 / 12.0 - inv2 * (1.0 / 360.0 - inv2 / 1260.0))
}

/// Error function, Abramowitz & Stegun 7.1.26 (|ε| ≤ 1.5e-7).
fn erf(x: f64) -> f64 {
    const A: [f64; 5] = [0.254_829_592, -0.284_496_736, 1.421_413_741, -1.453_152_027, 1.061_405_429];
    const P: f64 = 0.327_591_1;
    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = A.iter().rev().fold(0.0, |acc, a| acc * t + a) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Normal density N(mean, sd²) at x.
pub fn normal_pdf(x: f64, mean: f64, sd: f64) -> Result<f64> {
    positive("standard deviation", sd)?;
    let z = (x - mean) / sd;
    Ok((-0.5 * z * z).exp() / (sd * (2.0 * PI).sqrt()))
}

/// Normal cumulative distribution at x.
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> Result<f64> {
    positive("standard deviation", sd)?;
    Ok(0.5 * (1.0 + erf((x - mean) / (sd * 2f64.sqrt()))))
}

/// P(X = k) for X ~ Binomial(n, p).
pub fn binomial_pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    probability(p)?;
    if k > n {
        return Ok(0.0);
    }
    if p == 0.0 {
        return Ok(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Ok(if k == n { 1.0 } else { 0.0 });
    }
    let ln_choose = ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k);
    Ok((ln_choose + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln()).exp())
}

/// P(X = k) for X ~ Poisson(λ).
pub fn poisson_pmf(k: u64, lambda: f64) -> Result<f64> {
    positive("rate", lambda)?;
    Ok((k as f64 * lambda.ln() - lambda - ln_factorial(k)).exp())
}

/// Exponential density with the given rate; zero for negative x.
pub fn exponential_pdf(x: f64, rate: f64) -> Result<f64> {
    positive("rate", rate)?;
    Ok(if x < 0.0 { 0.0 } else { rate * (-rate * x).exp() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normal() {
        assert_abs_diff_eq!(normal_pdf(0.0, 0.0, 1.0).unwrap(), 0.398_942_280_401_432_7, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_cdf(0.0, 0.0, 1.0).unwrap(), 0.5, epsilon = 1e-7);
        assert_abs_diff_eq!(normal_cdf(1.96, 0.0, 1.0).unwrap(), 0.975, epsilon = 1e-4);
        assert_abs_diff_eq!(normal_cdf(-1.0, 0.0, 1.0).unwrap(), 0.158_655_253_931_457, epsilon = 1e-6);
        assert!(normal_pdf(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn discrete() {
        assert_abs_diff_eq!(binomial_pmf(2, 4, 0.5).unwrap(), 0.375, epsilon = 1e-12);
        assert_eq!(binomial_pmf(5, 4, 0.5).unwrap(), 0.0);
        assert_eq!(binomial_pmf(0, 3, 0.0).unwrap(), 1.0);
        assert!(binomial_pmf(1, 3, 1.5).is_err());
        assert!(binomial_pmf(1, 3, -0.1).is_err());
        assert_abs_diff_eq!(poisson_pmf(2, 3.0).unwrap(), 9.0 * (-3f64).exp() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(exponential_pdf(1.0, 2.0).unwrap(), 2.0 * (-2f64).exp(), epsilon = 1e-12);
        assert_eq!(exponential_pdf(-1.0, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn ln_factorial_is_continuous_at_the_switch() {
        let n = STIRLING_THRESHOLD + 1;
        let summed: f64 = (2..=n).map(|k| (k as f64).ln()).sum();
        assert_abs_diff_eq!(ln_factorial(n), summed, epsilon = 1e-9 * summed);
    }

    #[test]
    fn huge_counts_stay_cheap() {
        // the central binomial term is ≈ sqrt(2 / (π n))
        let n = 1_000_000_000u64;
        let expected = (2.0 / (PI * n as f64)).sqrt();
        let got = binomial_pmf(n / 2, n, 0.5).unwrap();
        assert!((got - expected).abs() < 1e-4 * expected, "{got} vs {expected}");
        // Poisson mode for large λ is ≈ 1 / sqrt(2πλ)
        let lambda = 1e12;
        let got = poisson_pmf(lambda as u64, lambda).unwrap();
        let expected = 1.0 / (2.0 * PI * lambda).sqrt();
        assert!((got - expected).abs() < 1e-2 * expected, "{got} vs {expected}");
    }
}
