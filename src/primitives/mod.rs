//! Numeric primitives: guarded arithmetic, roots, factorials and counting.

use crate::error::{NError, Result};

/// `a / b`, rejecting a zero divisor.
pub fn safe_divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(NError::InvalidArgument("division by zero".into()));
    }
    Ok(a / b)
}

/// Real `n`-th root of `x`.
///
/// Odd roots of negative numbers are returned with their sign; even roots of
/// negative numbers are rejected.
pub fn nth_root(x: f64, n: u32) -> Result<f64> {
    if n == 0 {
        return Err(NError::InvalidArgument("zeroth root is undefined".into()));
    }
    if x < 0.0 {
        if n % 2 == 0 {
            return Err(NError::InvalidArgument(format!("even root of negative number {x}")));
        }
        return Ok(-(-x).powf(1.0 / n as f64));
    }
    Ok(x.powf(1.0 / n as f64))
}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; `lcm(0, x) == 0`.
pub fn lcm(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or_else(|| NError::InvalidArgument(format!("lcm({a}, {b}) overflows u64")))
}

/// `n!`, failing once the product no longer fits in a `u128` (n > 34).
pub fn factorial(n: u32) -> Result<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k)
            .ok_or_else(|| NError::InvalidArgument(format!("{n}! overflows u128")))
    })
}

/// Ordered selections `P(n, k) = n! / (n - k)!`.
pub fn permutations(n: u32, k: u32) -> Result<u128> {
    if k > n {
        return Err(NError::InvalidArgument(format!("k = {k} exceeds n = {n}")));
    }
    ((n - k + 1) as u128..=n as u128).try_fold(1u128, |acc, f| {
        acc.checked_mul(f)
            .ok_or_else(|| NError::InvalidArgument(format!("P({n}, {k}) overflows u128")))
    })
}

/// Unordered selections `C(n, k)`, computed multiplicatively so that
/// intermediate values stay exact.
pub fn combinations(n: u32, k: u32) -> Result<u128> {
    if k > n {
        return Err(NError::InvalidArgument(format!("k = {k} exceeds n = {n}")));
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 1..=k {
        // acc * (n - k + i) is always divisible by i
        acc = acc
            .checked_mul(n - k + i)
            .ok_or_else(|| NError::InvalidArgument(format!("C({n}, {k}) overflows u128")))?
            / i;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small_and_overflow() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert!(factorial(35).is_err());
    }

    #[test]
    fn counting() {
        assert_eq!(permutations(5, 2).unwrap(), 20);
        assert_eq!(permutations(5, 0).unwrap(), 1);
        assert_eq!(combinations(5, 2).unwrap(), 10);
        assert_eq!(combinations(52, 5).unwrap(), 2_598_960);
        assert_eq!(combinations(10, 10).unwrap(), 1);
        assert!(combinations(3, 4).is_err());
    }

    #[test]
    fn roots_and_division() {
        assert!((nth_root(27.0, 3).unwrap() - 3.0).abs() < 1e-12);
        assert!((nth_root(-8.0, 3).unwrap() + 2.0).abs() < 1e-12);
        assert!(nth_root(-4.0, 2).is_err());
        assert!(safe_divide(1.0, 0.0).is_err());
        assert_eq!(safe_divide(6.0, 3.0).unwrap(), 2.0);
    }

    #[test]
    fn gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(0, 6).unwrap(), 0);
    }
}
