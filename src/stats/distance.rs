//! Vector norms, metrics and similarity measures.
//!
//! Every pairwise function requires two non-empty vectors of equal length.

use crate::core::traits::InnerProduct;
use crate::error::{NError, Result, check_same_len};

fn check_pair(a: &[f64], b: &[f64]) -> Result<()> {
    if a.is_empty() {
        return Err(NError::EmptyInput("vector"));
    }
    check_same_len(a.len(), b.len())
}

/// a · b.
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_pair(a, b)?;
    Ok(().dot(a, b))
}

/// ‖a‖₂.
pub fn norm(a: &[f64]) -> f64 {
    ().norm(a)
}

/// ‖a − b‖₂.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_pair(a, b)?;
    Ok(squared_euclidean(a, b).sqrt())
}

/// Squared Euclidean distance without validation, for inner loops whose
/// callers have already checked the dataset shape.
pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// ‖a − b‖₁.
pub fn manhattan_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_pair(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

/// ‖a − b‖∞.
pub fn chebyshev_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_pair(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max))
}

/// ‖a − b‖ₚ for p ≥ 1.
pub fn minkowski_distance(a: &[f64], b: &[f64], p: f64) -> Result<f64> {
    check_pair(a, b)?;
    if !(p >= 1.0) {
        return Err(NError::InvalidArgument(format!("Minkowski order must be >= 1, got {p}")));
    }
    if p.is_infinite() {
        return chebyshev_distance(a, b);
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs().powf(p)).sum();
    Ok(sum.powf(1.0 / p))
}

/// cos θ = a·b / (‖a‖ ‖b‖); undefined for a zero vector.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    check_pair(a, b)?;
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return Err(NError::InvalidArgument("cosine similarity of a zero vector".into()));
    }
    Ok(().dot(a, b) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn metrics_agree_on_simple_vectors() {
        let (a, b) = ([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        assert_abs_diff_eq!(euclidean_distance(&a, &b).unwrap(), 27f64.sqrt(), epsilon = 1e-12);
        assert_eq!(manhattan_distance(&a, &b).unwrap(), 9.0);
        assert_eq!(chebyshev_distance(&a, &b).unwrap(), 3.0);
        assert_abs_diff_eq!(minkowski_distance(&a, &b, 2.0).unwrap(), 27f64.sqrt(), epsilon = 1e-12);
        assert_eq!(minkowski_distance(&a, &b, f64::INFINITY).unwrap(), 3.0);
        assert_eq!(dot_product(&a, &b).unwrap(), 32.0);
    }

    #[test]
    fn cosine() {
        assert_abs_diff_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
        assert_abs_diff_eq!(cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]).unwrap(), 1.0, epsilon = 1e-12);
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn invalid_pairs() {
        assert_eq!(
            euclidean_distance(&[1.0], &[1.0, 2.0]).err(),
            Some(NError::DimensionMismatch { expected: 1, found: 2 })
        );
        assert_eq!(euclidean_distance(&[], &[]).err(), Some(NError::EmptyInput("vector")));
        assert!(minkowski_distance(&[1.0], &[2.0], 0.5).is_err());
    }
}
