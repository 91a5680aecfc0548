//! Descriptive statistics over samples.

use crate::error::{NError, Result, check_same_len};

fn non_empty(x: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(NError::EmptyInput("sample"));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(x: &[f64]) -> Result<f64> {
    non_empty(x)?;
    Ok(x.iter().sum::<f64>() / x.len() as f64)
}

/// Median; the mean of the two middle values for even lengths.
pub fn median(x: &[f64]) -> Result<f64> {
    non_empty(x)?;
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    Ok(if sorted.len() % 2 == 0 {
        0.5 * (sorted[mid - 1] + sorted[mid])
    } else {
        sorted[mid]
    })
}

/// Population variance (divides by n).
pub fn variance(x: &[f64]) -> Result<f64> {
    let m = mean(x)?;
    Ok(x.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / x.len() as f64)
}

/// Sample variance (divides by n − 1).
pub fn sample_variance(x: &[f64]) -> Result<f64> {
    if x.len() < 2 {
        return Err(NError::InvalidArgument("sample variance needs at least two values".into()));
    }
    let m = mean(x)?;
    Ok(x.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (x.len() - 1) as f64)
}

/// Population standard deviation.
pub fn std_dev(x: &[f64]) -> Result<f64> {
    Ok(variance(x)?.sqrt())
}

/// Population covariance of two equal-length samples.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x.len(), y.len())?;
    let (mx, my) = (mean(x)?, mean(y)?);
    Ok(x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum::<f64>() / x.len() as f64)
}

/// Pearson correlation coefficient; undefined when either sample is constant.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let cov = covariance(x, y)?;
    let denom = (variance(x)? * variance(y)?).sqrt();
    if denom == 0.0 {
        return Err(NError::InvalidArgument("correlation of a constant sample".into()));
    }
    Ok((cov / denom).clamp(-1.0, 1.0))
}
