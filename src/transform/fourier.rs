//! Direct O(n²) DFT. No FFT: the toolkit targets short signals.

use crate::error::{NError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

fn dft(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(t, &x)| {
                    // reduce k*t mod n before scaling to keep the angle small
                    let angle = sign * 2.0 * PI * ((k * t) % n) as f64 / n as f64;
                    x * Complex64::from_polar(1.0, angle)
                })
                .sum()
        })
        .collect()
}

/// X_k = Σₜ x_t · e^{−2πi·kt/n} for every bin k in 0..n.
pub fn fourier_transform(signal: &[f64]) -> Result<Vec<Complex64>> {
    if signal.is_empty() {
        return Err(NError::EmptyInput("signal"));
    }
    let input: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    Ok(dft(&input, -1.0))
}

/// Inverse of [`fourier_transform`], including the 1/n factor.
pub fn inverse_fourier_transform(spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
    if spectrum.is_empty() {
        return Err(NError::EmptyInput("spectrum"));
    }
    let n = spectrum.len() as f64;
    Ok(dft(spectrum, 1.0).into_iter().map(|x| x / n).collect())
}
